pub mod test_distinct_identities;
