mod test_handler;
