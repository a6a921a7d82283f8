mod calculator_test;
