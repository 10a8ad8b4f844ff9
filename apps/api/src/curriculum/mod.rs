// Curriculum: form model, fixed catalogs, phase mapping, reference CP table.

pub mod cp_reference;
pub mod form;
pub mod handlers;
pub mod models;
pub mod phase;
