mod input_value_tests;
mod operation_tests;
