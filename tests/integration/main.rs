mod export_tests;
