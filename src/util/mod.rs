pub(crate) mod dates;
mod macros;
