use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/// Merkle allow-list membership check.
///
/// Leaves are `hashv(identity)`; interior nodes hash the sorted pair of
/// their children, so proofs carry no left/right flags. Membership is
/// always evaluated against the root currently stored on the marketplace:
/// replacing the root invalidates every proof issued against the old one.

pub fn leaf_for(identity: &Pubkey) -> [u8; 32] {
    hashv(&[identity.as_ref()]).to_bytes()
}

pub fn is_member(proof: &[[u8; 32]], root: &[u8; 32], identity: &Pubkey) -> bool {
    let mut node = leaf_for(identity);

    for sibling in proof.iter() {
        let combined = if node <= *sibling {
            [node.as_ref(), sibling.as_ref()].concat()
        } else {
            [sibling.as_ref(), node.as_ref()].concat()
        };
        node = hashv(&[&combined]).to_bytes();
    }

    node == *root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(a: [u8; 32], b: [u8; 32]) -> [u8; 32] {
        let combined = if a <= b {
            [a.as_ref(), b.as_ref()].concat()
        } else {
            [b.as_ref(), a.as_ref()].concat()
        };
        hashv(&[&combined]).to_bytes()
    }

    /// Four-leaf tree over the given identities; returns the root and the
    /// proof for each leaf in order.
    fn four_leaf_tree(ids: &[Pubkey; 4]) -> ([u8; 32], Vec<Vec<[u8; 32]>>) {
        let leaves: Vec<[u8; 32]> = ids.iter().map(leaf_for).collect();
        let n01 = parent(leaves[0], leaves[1]);
        let n23 = parent(leaves[2], leaves[3]);
        let root = parent(n01, n23);

        let proofs = vec![
            vec![leaves[1], n23],
            vec![leaves[0], n23],
            vec![leaves[3], n01],
            vec![leaves[2], n01],
        ];
        (root, proofs)
    }

    #[test]
    fn every_leaf_verifies_against_the_root() {
        let ids = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        let (root, proofs) = four_leaf_tree(&ids);

        for (id, proof) in ids.iter().zip(proofs.iter()) {
            assert!(is_member(proof, &root, id));
        }
    }

    #[test]
    fn outsiders_and_swapped_proofs_fail() {
        let ids = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        let (root, proofs) = four_leaf_tree(&ids);

        let outsider = Pubkey::new_unique();
        assert!(!is_member(&proofs[0], &root, &outsider));

        // A valid proof for leaf 0 does not admit leaf 2.
        assert!(!is_member(&proofs[0], &root, &ids[2]));
    }

    #[test]
    fn replacing_the_root_invalidates_old_proofs() {
        let ids = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        let (root, proofs) = four_leaf_tree(&ids);
        assert!(is_member(&proofs[0], &root, &ids[0]));

        // New commitment over a different membership set.
        let new_ids = [
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        let (new_root, _) = four_leaf_tree(&new_ids);
        assert!(!is_member(&proofs[0], &new_root, &ids[0]));
    }

    #[test]
    fn single_leaf_tree_uses_an_empty_proof() {
        let id = Pubkey::new_unique();
        let root = leaf_for(&id);
        assert!(is_member(&[], &root, &id));
        assert!(!is_member(&[], &root, &Pubkey::new_unique()));
    }
}
