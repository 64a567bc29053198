//! Farm tracker backend: animal registry, breeding records and the
//! birth-event workflow, persisted as flat JSON files and served over HTTP.

pub mod domain;
pub mod rest;
pub mod storage;
