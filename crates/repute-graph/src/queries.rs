//! GraphQL documents. Every value is passed as a variable.

/// Triples where the address is the subject or the object, one page.
pub const TRIPLES_FOR_ADDRESS: &str = r#"
query TriplesForAddress($address: String!, $limit: Int!, $offset: Int!) {
  triples(
    limit: $limit
    offset: $offset
    order_by: { created_at: desc }
    where: {
      _or: [
        { subject: { data: { _ilike: $address } } }
        { object: { data: { _ilike: $address } } }
      ]
    }
  ) {
    id
    created_at
    subject { data label }
    predicate { data label }
    object { data label }
    vault { total_shares }
  }
}
"#;

/// Label of the atom whose data is the address.
pub const ATOM_LABEL: &str = r#"
query AtomLabel($address: String!) {
  atoms(limit: 1, where: { data: { _ilike: $address } }) {
    data
    label
  }
}
"#;

/// Triples created plus deposits sent by the account.
pub const ACCOUNT_ACTIVITY: &str = r#"
query AccountActivity($address: String!) {
  accounts(where: { id: { _ilike: $address } }) {
    triples_aggregate { aggregate { count } }
    deposits_sent_aggregate { aggregate { count } }
  }
}
"#;

/// Positions held by the account, one page.
pub const POSITIONS_FOR_ACCOUNT: &str = r#"
query PositionsForAccount($address: String!, $limit: Int!, $offset: Int!) {
  positions(limit: $limit, offset: $offset, where: { account_id: { _ilike: $address } }) {
    total_redeem_assets_for_receiver
  }
}
"#;
