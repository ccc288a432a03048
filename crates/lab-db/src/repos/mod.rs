//! Repository modules implementing queries on `SpecimenStore`.

pub mod specimen;
