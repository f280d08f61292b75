use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use th_core::{Action, Narration, Shop, Tone};

pub fn narration<W: Write>(out: &mut W, lines: &[Narration]) -> io::Result<()> {
    for line in lines {
        match line.tone {
            Tone::Plain => writeln!(out, "{}", line.text)?,
            Tone::Info => writeln!(out, "{}", line.text.yellow())?,
            Tone::Good => writeln!(out, "{}", line.text.green())?,
            Tone::Bad => writeln!(out, "{}", line.text.red())?,
        }
    }
    Ok(())
}

pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    for action in Action::ALL {
        let label = action.menu_label();
        if action == Action::Exit {
            writeln!(out, "{}", label.red())?;
        } else {
            writeln!(out, "{}", label.blue())?;
        }
    }
    Ok(())
}

pub fn catalog<W: Write>(out: &mut W, shop: &Shop) -> io::Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Buy", "Sell"]);

    for listing in shop.catalog() {
        table.add_row(vec![
            listing.item.to_string(),
            format!("{} gold", listing.price),
            format!("{} gold", listing.resale),
        ]);
    }

    writeln!(out, "{table}")
}

pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text.green())?;
    out.flush()
}

pub fn error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.yellow())
}
