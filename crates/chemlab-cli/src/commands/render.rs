use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use chemlab::core::catalog::Catalog;
use chemlab::core::models::molecule::Molecule;
use chemlab::core::render::{render, to_svg};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    let molecule = Catalog::global().require(&args.molecule)?;
    if let Some(id) = &args.select {
        if molecule.selectable(id).is_none() {
            return Err(CliError::Argument(format!(
                "'{}' is not an atom or bond of {}",
                id, molecule.id
            )));
        }
    }
    let svg = molecule_svg(molecule, args.select.as_deref());
    match &args.output {
        Some(path) => {
            write_svg(path, &svg)?;
            println!("✓ Diagram written to: {}", path.display());
        }
        None => std::io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}

pub fn molecule_svg(molecule: &Molecule, selected: Option<&str>) -> String {
    let title = format!("{} {}", molecule.name, molecule.formula);
    to_svg(&render(molecule, selected), Some(&title))
}

pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    info!("Writing SVG to {:?}", path);
    std::fs::write(path, svg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn render_writes_svg_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ethyne.svg");
        run(RenderArgs {
            molecule: "ethyne".into(),
            select: Some("b1".into()),
            output: Some(path.clone()),
        })
        .unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<title>乙炔 (Ethyne) C₂H₂</title>"));
        assert!(svg.contains(r#"class="bond selected""#));
    }

    #[test]
    fn render_rejects_unknown_selection() {
        let err = run(RenderArgs {
            molecule: "ethene".into(),
            select: Some("b9".into()),
            output: None,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Argument(_)));
    }

    #[test]
    fn render_rejects_unknown_molecule() {
        let err = run(RenderArgs {
            molecule: "benzene".into(),
            select: None,
            output: None,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Catalog(_)));
    }
}
