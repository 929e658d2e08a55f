mod delete_result;
mod list_results;
mod register_result;

pub(crate) use delete_result::delete_result;
pub(crate) use list_results::list_results;
pub(crate) use register_result::register_result;
