pub(crate) mod serde_json;
