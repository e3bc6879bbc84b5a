use crate::error::Result;
use isofrac::core::isotopes::table::IsotopeTable;

pub fn run() -> Result<()> {
    for line in render(&IsotopeTable::reference()) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render(table: &IsotopeTable) -> Vec<String> {
    table.iter().map(ToString::to_string).collect()
}
