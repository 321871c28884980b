use super::geometry::{distance_to_segment, offset_segment};
use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::{Bond, BondOrder};
use nalgebra::Point2;
use serde::Serialize;
use tracing::warn;

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

pub const DOUBLE_BOND_OFFSET: f64 = 4.0;
pub const TRIPLE_BOND_OFFSET: f64 = 8.0;
pub const SINGLE_HIT_WIDTH: f64 = 15.0;
pub const MULTIPLE_HIT_WIDTH: f64 = 20.0;

pub const HIGHLIGHT_COLOR: &str = "#3b82f6";
pub const BOND_COLOR: &str = "#94a3b8";
pub const ATOM_OUTLINE_COLOR: &str = "white";
pub const TRANSPARENT: &str = "transparent";

const BOND_WIDTH: f64 = 2.0;
const SELECTED_BOND_WIDTH: f64 = 4.0;
const ATOM_OUTLINE_WIDTH: f64 = 2.0;
const SELECTED_ATOM_OUTLINE_WIDTH: f64 = 3.0;

const SINGLE_OFFSETS: &[f64] = &[0.0];
const DOUBLE_OFFSETS: &[f64] = &[DOUBLE_BOND_OFFSET, -DOUBLE_BOND_OFFSET];
const TRIPLE_OFFSETS: &[f64] = &[0.0, TRIPLE_BOND_OFFSET, -TRIPLE_BOND_OFFSET];

/// A straight line primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
    pub color: &'static str,
    pub width: f64,
}

/// Everything drawn for one bond: the visible strokes and an invisible, wider
/// stroke on the centerline that receives pointer events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondGlyph {
    pub bond_id: String,
    pub order: BondOrder,
    pub selected: bool,
    pub strokes: Vec<Stroke>,
    pub hit_area: Stroke,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomGlyph {
    pub atom_id: String,
    pub element: Element,
    pub selected: bool,
    pub center: Point2<f64>,
    pub radius: f64,
    pub fill: &'static str,
    pub outline_color: &'static str,
    pub outline_width: f64,
    pub label: &'static str,
    pub label_color: &'static str,
    pub font_size: f64,
}

/// The drawable form of a molecule in logical canvas coordinates.
///
/// Bonds are painted first and atoms on top, in the order of the vectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub bonds: Vec<BondGlyph>,
    pub atoms: Vec<AtomGlyph>,
}

/// The entity under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit<'a> {
    Atom(&'a str),
    Bond(&'a str),
}

impl Hit<'_> {
    pub fn id(&self) -> &str {
        match self {
            Hit::Atom(id) | Hit::Bond(id) => id,
        }
    }
}

impl Scene {
    /// Finds the single entity that receives a click at `point`.
    ///
    /// Atoms are tested before bonds and later glyphs before earlier ones, which
    /// mirrors paint order: the topmost shape swallows the click and nothing
    /// beneath it is reported.
    pub fn hit_test(&self, point: &Point2<f64>) -> Option<Hit<'_>> {
        if let Some(atom) = self
            .atoms
            .iter()
            .rev()
            .find(|a| (point - a.center).norm() <= a.radius)
        {
            return Some(Hit::Atom(&atom.atom_id));
        }

        self.bonds
            .iter()
            .rev()
            .find(|b| {
                distance_to_segment(point, &b.hit_area.from, &b.hit_area.to)
                    <= b.hit_area.width / 2.0
            })
            .map(|b| Hit::Bond(&b.bond_id))
    }

    pub fn bond(&self, id: &str) -> Option<&BondGlyph> {
        self.bonds.iter().find(|b| b.bond_id == id)
    }

    pub fn atom(&self, id: &str) -> Option<&AtomGlyph> {
        self.atoms.iter().find(|a| a.atom_id == id)
    }
}

/// Lays out `molecule` as a [`Scene`], highlighting the element whose id is
/// `selected`.
///
/// This is a pure function of its inputs. Bonds whose endpoints cannot be
/// resolved are left out of the scene.
pub fn render(molecule: &Molecule, selected: Option<&str>) -> Scene {
    let bonds = molecule
        .bonds
        .iter()
        .filter_map(|bond| {
            let Some((source, target)) = molecule.bond_endpoints(bond) else {
                warn!(
                    molecule = %molecule.id,
                    bond = %bond.id,
                    "Skipping bond with unresolved endpoint."
                );
                return None;
            };
            Some(bond_glyph(bond, source, target, selected == Some(bond.id.as_str())))
        })
        .collect();

    let atoms = molecule
        .atoms
        .iter()
        .map(|atom| atom_glyph(atom, selected == Some(atom.id.as_str())))
        .collect();

    Scene {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        bonds,
        atoms,
    }
}

fn bond_glyph(bond: &Bond, source: &Atom, target: &Atom, selected: bool) -> BondGlyph {
    let color = if selected { HIGHLIGHT_COLOR } else { BOND_COLOR };
    let width = if selected { SELECTED_BOND_WIDTH } else { BOND_WIDTH };
    let (from, to) = (source.position, target.position);

    let stroke = |offset: f64| {
        let (from, to) = offset_segment(&from, &to, offset);
        Stroke {
            from,
            to,
            color,
            width,
        }
    };

    // Aromatic rings have no dedicated encoding yet and draw like single bonds.
    let (offsets, hit_width) = match bond.order {
        BondOrder::Single | BondOrder::Aromatic => (SINGLE_OFFSETS, SINGLE_HIT_WIDTH),
        BondOrder::Double => (DOUBLE_OFFSETS, MULTIPLE_HIT_WIDTH),
        BondOrder::Triple => (TRIPLE_OFFSETS, MULTIPLE_HIT_WIDTH),
    };

    BondGlyph {
        bond_id: bond.id.clone(),
        order: bond.order,
        selected,
        strokes: offsets.iter().map(|&o| stroke(o)).collect(),
        hit_area: Stroke {
            from,
            to,
            color: TRANSPARENT,
            width: hit_width,
        },
    }
}

fn atom_glyph(atom: &Atom, selected: bool) -> AtomGlyph {
    let element = atom.element;
    AtomGlyph {
        atom_id: atom.id.clone(),
        element,
        selected,
        center: atom.position,
        radius: element.radius(),
        fill: element.color(),
        outline_color: if selected { HIGHLIGHT_COLOR } else { ATOM_OUTLINE_COLOR },
        outline_width: if selected {
            SELECTED_ATOM_OUTLINE_WIDTH
        } else {
            ATOM_OUTLINE_WIDTH
        },
        label: element.symbol(),
        label_color: element.label_color(),
        font_size: element.label_font_size(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::builder::MoleculeBuilder;
    use crate::core::render::geometry::unit_direction;
    use nalgebra::Vector2;

    const TOLERANCE: f64 = 1e-9;

    fn catalog_molecule(id: &str) -> &'static Molecule {
        Catalog::global().require(id).unwrap()
    }

    fn signed_offset(stroke: &Stroke, from: &Point2<f64>, to: &Point2<f64>) -> f64 {
        let dir = unit_direction(from, to);
        let normal = Vector2::new(-dir.y, dir.x);
        (stroke.from - from).dot(&normal)
    }

    fn assert_parallel_offsets(glyph: &BondGlyph, from: &Point2<f64>, to: &Point2<f64>, expected: &[f64]) {
        let dir = unit_direction(from, to);
        let mut offsets: Vec<f64> = glyph
            .strokes
            .iter()
            .map(|s| {
                let stroke_dir = unit_direction(&s.from, &s.to);
                assert!((stroke_dir - dir).norm() < TOLERANCE, "stroke not parallel");
                let start = signed_offset(s, from, to);
                let end = (s.to - to).dot(&Vector2::new(-dir.y, dir.x));
                assert!((start - end).abs() < TOLERANCE);
                start
            })
            .collect();
        offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut expected = expected.to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(offsets.len(), expected.len());
        for (got, want) in offsets.iter().zip(expected.iter()) {
            assert!((got - want).abs() < TOLERANCE, "offset {got} != {want}");
        }
    }

    #[test]
    fn single_bond_has_one_centered_stroke_and_narrow_hit_area() {
        let ethane = catalog_molecule("ethane");
        let scene = render(ethane, None);
        let glyph = scene.bond("b1").unwrap();
        assert_eq!(glyph.strokes.len(), 1);
        assert_eq!(glyph.strokes[0].from, ethane.atom("c1").unwrap().position);
        assert_eq!(glyph.strokes[0].to, ethane.atom("c2").unwrap().position);
        assert_eq!(glyph.hit_area.width, SINGLE_HIT_WIDTH);
        assert_eq!(glyph.hit_area.color, TRANSPARENT);
    }

    #[test]
    fn double_bond_strokes_are_parallel_and_symmetric() {
        let ethene = catalog_molecule("ethene");
        let scene = render(ethene, None);
        let glyph = scene.bond("b1").unwrap();
        let from = ethene.atom("c1").unwrap().position;
        let to = ethene.atom("c2").unwrap().position;
        assert_parallel_offsets(glyph, &from, &to, &[4.0, -4.0]);
        assert_eq!(glyph.hit_area.width, MULTIPLE_HIT_WIDTH);
        assert_eq!(glyph.hit_area.from, from);
        assert_eq!(glyph.hit_area.to, to);
    }

    #[test]
    fn triple_bond_has_center_and_two_outer_strokes() {
        let ethyne = catalog_molecule("ethyne");
        let scene = render(ethyne, None);
        let glyph = scene.bond("b1").unwrap();
        let from = ethyne.atom("c1").unwrap().position;
        let to = ethyne.atom("c2").unwrap().position;
        assert_parallel_offsets(glyph, &from, &to, &[0.0, 8.0, -8.0]);
        assert_eq!(glyph.hit_area.width, MULTIPLE_HIT_WIDTH);
    }

    #[test]
    fn offsets_hold_for_diagonal_double_bonds() {
        let mol = MoleculeBuilder::new("diag", "对角 (Diagonal)", "X")
            .add_atom("a", Element::Carbon, 100.0, 100.0)
            .add_atom("b", Element::Oxygen, 160.0, 180.0)
            .add_bond("b1", "a", "b", BondOrder::Double, "C=O")
            .build();
        let scene = render(&mol, None);
        assert_parallel_offsets(
            scene.bond("b1").unwrap(),
            &Point2::new(100.0, 100.0),
            &Point2::new(160.0, 180.0),
            &[4.0, -4.0],
        );
    }

    #[test]
    fn coincident_atoms_do_not_produce_nan() {
        let mol = MoleculeBuilder::new("dup", "重叠 (Overlap)", "X")
            .add_atom("a", Element::Carbon, 50.0, 50.0)
            .add_atom("b", Element::Carbon, 50.0, 50.0)
            .add_bond("b1", "a", "b", BondOrder::Triple, "C≡C")
            .build();
        let scene = render(&mol, None);
        let glyph = scene.bond("b1").unwrap();
        for stroke in &glyph.strokes {
            assert!(stroke.from.x.is_finite() && stroke.from.y.is_finite());
            assert_eq!(stroke.from, Point2::new(50.0, 50.0));
        }
    }

    #[test]
    fn aromatic_bond_draws_like_single() {
        let mol = MoleculeBuilder::new("ar", "芳香 (Aromatic)", "X")
            .add_atom("a", Element::Carbon, 0.0, 0.0)
            .add_atom("b", Element::Carbon, 10.0, 0.0)
            .add_bond("b1", "a", "b", BondOrder::Aromatic, "C:C")
            .build();
        let glyph = render(&mol, None).bonds.remove(0);
        assert_eq!(glyph.strokes.len(), 1);
        assert_eq!(glyph.hit_area.width, SINGLE_HIT_WIDTH);
    }

    #[test]
    fn dangling_bond_is_skipped() {
        let mol = MoleculeBuilder::new("bad", "坏 (Broken)", "X")
            .add_atom("a", Element::Carbon, 0.0, 0.0)
            .add_atom("b", Element::Carbon, 10.0, 0.0)
            .add_bond("b1", "a", "b", BondOrder::Single, "C-C")
            .add_bond("b2", "a", "ghost", BondOrder::Single, "C-?")
            .build();
        let scene = render(&mol, None);
        assert_eq!(scene.bonds.len(), 1);
        assert!(scene.bond("b2").is_none());
        assert_eq!(scene.atoms.len(), 2);
    }

    #[test]
    fn selection_highlights_only_the_selected_entity() {
        let ethene = catalog_molecule("ethene");
        let scene = render(ethene, Some("b1"));
        for glyph in &scene.bonds {
            let expected_color = if glyph.bond_id == "b1" { HIGHLIGHT_COLOR } else { BOND_COLOR };
            let expected_width = if glyph.bond_id == "b1" { 4.0 } else { 2.0 };
            assert_eq!(glyph.selected, glyph.bond_id == "b1");
            for stroke in &glyph.strokes {
                assert_eq!(stroke.color, expected_color);
                assert_eq!(stroke.width, expected_width);
            }
        }
        assert!(scene.atoms.iter().all(|a| !a.selected && a.outline_color == "white"));

        let scene = render(ethene, Some("h1"));
        let h1 = scene.atom("h1").unwrap();
        assert_eq!(h1.outline_color, HIGHLIGHT_COLOR);
        assert_eq!(h1.outline_width, 3.0);
        assert_eq!(scene.atom("c1").unwrap().outline_width, 2.0);
    }

    #[test]
    fn atoms_use_element_lookup() {
        let scene = render(catalog_molecule("ethene"), None);
        let c1 = scene.atom("c1").unwrap();
        assert_eq!((c1.radius, c1.fill, c1.label, c1.label_color), (20.0, "#374151", "C", "white"));
        let h1 = scene.atom("h1").unwrap();
        assert_eq!((h1.radius, h1.fill, h1.label, h1.label_color), (12.0, "#cbd5e1", "H", "#475569"));
    }

    #[test]
    fn rendering_is_idempotent() {
        for molecule in Catalog::global().molecules() {
            assert_eq!(render(molecule, Some("b1")), render(molecule, Some("b1")));
            assert_eq!(render(molecule, None), render(molecule, None));
        }
    }

    #[test]
    fn hit_test_prefers_atom_over_bond_beneath_it() {
        let ethene = catalog_molecule("ethene");
        let scene = render(ethene, None);
        // c1 sits on the end of b1, b2 and b3.
        let c1 = ethene.atom("c1").unwrap().position;
        assert_eq!(scene.hit_test(&c1), Some(Hit::Atom("c1")));
    }

    #[test]
    fn hit_test_finds_bond_within_tolerance() {
        let ethene = catalog_molecule("ethene");
        let scene = render(ethene, None);
        // Midpoint of b1 is (300, 200); 9 units off is inside the 20-wide hit area.
        assert_eq!(scene.hit_test(&Point2::new(300.0, 209.0)), Some(Hit::Bond("b1")));
        assert_eq!(scene.hit_test(&Point2::new(300.0, 215.0)), None);
    }

    #[test]
    fn hit_test_misses_empty_canvas() {
        let scene = render(catalog_molecule("ethyne"), None);
        assert_eq!(scene.hit_test(&Point2::new(10.0, 390.0)), None);
    }
}
