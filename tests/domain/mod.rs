mod blob_name_test;
