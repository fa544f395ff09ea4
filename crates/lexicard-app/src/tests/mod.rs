mod run_import_tests;
