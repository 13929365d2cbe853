mod test_id;
mod test_model_utils;
