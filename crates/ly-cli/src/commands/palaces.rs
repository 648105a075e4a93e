use comfy_table::{ContentArrangement, Table};

use ly_engine::{Language, Lineage, Trigram, palace_family};

pub fn run(lang: Language) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![lang.catalog().lbl_palace.to_string()];
    header.extend(Lineage::all().iter().map(|l| lang.lineage(*l).to_string()));
    table.set_header(header);

    // Traditional palace order.
    let order = [
        Trigram::Qian,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Li,
        Trigram::Kun,
        Trigram::Dui,
    ];
    for palace in order {
        let family = palace_family(palace).map_err(|e| e.to_string())?;
        let mut row = vec![format!(
            "{} ({})",
            lang.trigram(palace).name,
            lang.element(palace.element())
        )];
        row.extend(
            family
                .iter()
                .map(|(bits, _)| lang.hexagram_name(bits.value()).to_string()),
        );
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
