mod test_biolink_db;
