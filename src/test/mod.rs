
mod test_history;
mod test_session;
