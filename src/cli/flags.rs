use crate::pass::ClassSet;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub strength: bool,
    pub save: bool,
    pub default: bool,
    pub interactive: bool,
    pub quiet: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    /// Classes switched off with `--no-*`.
    pub disabled: ClassSet,
    /// Exact class selection from `--only`.
    pub only: Option<ClassSet>,
}
