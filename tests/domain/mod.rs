mod question_test;
