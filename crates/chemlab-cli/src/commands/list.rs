use crate::error::Result;
use crate::ui;
use chemlab::core::catalog::Catalog;

pub fn run() -> Result<()> {
    print!("{}", ui::molecule_list(Catalog::global(), None));
    Ok(())
}
