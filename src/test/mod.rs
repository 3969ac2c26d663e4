mod test_session;
mod test_console;
