use crate::core::models::builder::MoleculeBuilder;
use crate::core::models::element::Element::{Carbon as C, Hydrogen as H};
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder::{Double, Single, Triple};

// Layout origin and bond scale shared by all diagrams.
const CX: f64 = 300.0;
const CY: f64 = 200.0;
const SCALE: f64 = 60.0;

pub(super) fn molecules() -> Vec<Molecule> {
    vec![ethene(), ethane(), ethyne()]
}

fn ethene() -> Molecule {
    MoleculeBuilder::new("ethene", "乙烯 (Ethene)", "C₂H₄")
        .description("最简单的烯烃，包含一个碳碳双键。")
        .add_atom("c1", C, CX - SCALE, CY)
        .add_atom("c2", C, CX + SCALE, CY)
        .add_atom("h1", H, CX - SCALE - SCALE * 0.8, CY - SCALE * 1.2)
        .add_atom("h2", H, CX - SCALE - SCALE * 0.8, CY + SCALE * 1.2)
        .add_atom("h3", H, CX + SCALE + SCALE * 0.8, CY - SCALE * 1.2)
        .add_atom("h4", H, CX + SCALE + SCALE * 0.8, CY + SCALE * 1.2)
        .add_bond("b1", "c1", "c2", Double, "C=C 双键 (1σ + 1π)")
        .add_bond("b2", "c1", "h1", Single, "C-H 单键 (sp²-s σ)")
        .add_bond("b3", "c1", "h2", Single, "C-H 单键 (sp²-s σ)")
        .add_bond("b4", "c2", "h3", Single, "C-H 单键 (sp²-s σ)")
        .add_bond("b5", "c2", "h4", Single, "C-H 单键 (sp²-s σ)")
        .lab_actions(&[
            "加入溴水 (Br₂)",
            "加入酸性高锰酸钾 (KMnO₄)",
            "加氢反应 (H₂)",
            "分析杂化轨道",
        ])
        .build()
}

fn ethane() -> Molecule {
    MoleculeBuilder::new("ethane", "乙烷 (Ethane)", "C₂H₆")
        .description("饱和烷烃，碳原子之间通过单键连接，可以自由旋转。")
        .add_atom("c1", C, CX - SCALE, CY)
        .add_atom("c2", C, CX + SCALE, CY)
        .add_atom("h1", H, CX - SCALE - SCALE * 0.8, CY - SCALE * 1.0)
        .add_atom("h2", H, CX - SCALE - SCALE * 0.5, CY + SCALE * 1.3)
        // h3 and h6 sit roughly behind the drawing plane.
        .add_atom("h3", H, CX - SCALE - SCALE * 0.5, CY - SCALE * 1.3)
        .add_atom("h4", H, CX + SCALE + SCALE * 0.8, CY - SCALE * 1.0)
        .add_atom("h5", H, CX + SCALE + SCALE * 0.5, CY + SCALE * 1.3)
        .add_atom("h6", H, CX + SCALE + SCALE * 0.5, CY - SCALE * 1.3)
        .add_bond("b1", "c1", "c2", Single, "C-C 单键 (sp³-sp³ σ)")
        .add_bond("b2", "c1", "h1", Single, "C-H 单键")
        .add_bond("b3", "c1", "h2", Single, "C-H 单键")
        .add_bond("b4", "c1", "h3", Single, "C-H 单键")
        .add_bond("b5", "c2", "h4", Single, "C-H 单键")
        .add_bond("b6", "c2", "h5", Single, "C-H 单键")
        .add_bond("b7", "c2", "h6", Single, "C-H 单键")
        .lab_actions(&["加入溴水 (Br₂)", "光照卤代反应", "燃烧分析"])
        .build()
}

fn ethyne() -> Molecule {
    MoleculeBuilder::new("ethyne", "乙炔 (Ethyne)", "C₂H₂")
        .description("最简单的炔烃，包含一个碳碳三键，分子呈直线型。")
        .add_atom("c1", C, CX - SCALE * 0.8, CY)
        .add_atom("c2", C, CX + SCALE * 0.8, CY)
        .add_atom("h1", H, CX - SCALE * 2.5, CY)
        .add_atom("h2", H, CX + SCALE * 2.5, CY)
        .add_bond("b1", "c1", "c2", Triple, "C≡C 三键 (1σ + 2π)")
        .add_bond("b2", "c1", "h1", Single, "C-H 单键 (sp-s σ)")
        .add_bond("b3", "c2", "h2", Single, "C-H 单键 (sp-s σ)")
        .lab_actions(&["加入溴水 (Br₂)", "燃烧观察火焰", "分析键长"])
        .build()
}
