pub(crate) mod excerpt;
pub(crate) mod tokenizer;
