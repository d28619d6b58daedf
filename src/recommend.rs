use std::collections::BinaryHeap;
use std::cmp::Ordering;

/// A candidate user together with its cosine similarity to the target user.
#[derive(PartialEq, Clone, Debug)]
pub struct ScoredUser {
    pub user: u32,
    pub score: f64,
}

/// Ordering for our max-heap, note that we must use a special implementation
/// here as there is no total order on floating point numbers. The heap keeps
/// the worst retained candidate on top: lower scores compare greater, and
/// equal scores fall back to the user id so that ranking is deterministic.
fn cmp_reverse(scored_user_a: &ScoredUser, scored_user_b: &ScoredUser) -> Ordering {
    match scored_user_a.score.partial_cmp(&scored_user_b.score) {
        Some(Ordering::Less) => Ordering::Greater,
        Some(Ordering::Greater) => Ordering::Less,
        _ => scored_user_a.user.cmp(&scored_user_b.user),
    }
}

impl Eq for ScoredUser {}

impl Ord for ScoredUser {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_reverse(self, other)
    }
}

impl PartialOrd for ScoredUser {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_reverse(self, other))
    }
}

/// Ranks all users except the target by descending similarity score, ties
/// broken by ascending user id, and returns at most `k` of them. If `k`
/// exceeds the number of eligible users, all eligible users are returned.
pub fn top_k(similarities: &[f64], target_user: usize, k: usize) -> Vec<ScoredUser> {

    if k == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(k);

    for (user, &score) in similarities.iter().enumerate() {

        if user == target_user {
            continue;
        }

        let scored_user = ScoredUser { user: user as u32, score };

        if heap.len() < k {
            heap.push(scored_user);
        } else {
            let mut top = heap.peek_mut().unwrap();
            if scored_user < *top {
                *top = scored_user;
            }
        }
    }

    heap.into_sorted_vec()
}
