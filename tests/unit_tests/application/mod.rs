mod file_dispatcher_test;
