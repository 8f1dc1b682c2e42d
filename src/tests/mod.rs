mod phonearea_tests;
