pub mod bom;
pub mod component;
pub mod names;
pub mod selective_map;

pub use bom::{AddonSpec, Components, ImageConfig, KubeadmConfigSpec, Release, TkrBom};
pub use component::{ComponentEntry, ImageRef, Images};
pub use selective_map::SelectiveMap;
