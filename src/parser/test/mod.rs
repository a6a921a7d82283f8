mod unit_key_script_parser;
