mod pages_tests;
