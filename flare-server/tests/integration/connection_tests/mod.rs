pub mod test_disconnect_broadcast;
pub mod test_first_client_identity;
