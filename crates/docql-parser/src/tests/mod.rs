mod parser_tests;
mod printer_tests;
mod utils;
