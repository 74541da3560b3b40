use crate::utils::FastHashSet;
use alloy_primitives::Address;

/// Token addresses kept both in configured order and as a hash set.
///
/// Membership checks go through the set. Iteration always follows the configured order, which matters
/// for the whitelist where the first qualifying entry wins.
#[derive(Clone, Debug, Default)]
pub struct TokenSet {
    ordered: Vec<Address>,
    members: FastHashSet<Address>,
}

impl TokenSet {
    pub fn new(tokens: Vec<Address>) -> Self {
        tokens.into_iter().collect()
    }

    pub fn contains(&self, token: &Address) -> bool {
        self.members.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl FromIterator<Address> for TokenSet {
    /// Duplicates keep their first position.
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        let mut token_set = TokenSet::default();
        for token in iter {
            if token_set.members.insert(token) {
                token_set.ordered.push(token);
            }
        }
        token_set
    }
}
