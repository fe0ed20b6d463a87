// src/layout/order.rs

/// Group nodes into per-rank rows and reduce edge crossings.
///
/// Initial order within a rank is node-index order. A forward barycenter
/// pass then sorts each rank by the mean position of its predecessors, and
/// a backward pass by the mean position of its successors. Sorting is
/// stable and nodes without neighbours sort after the rest, so the result
/// is deterministic for a fixed input.
pub fn order_ranks(
    node_count: usize,
    edges: &[(usize, usize)],
    ranks: &[usize],
) -> Vec<Vec<usize>> {
    let rank_count = ranks.iter().copied().max().map_or(0, |m| m + 1);
    let mut rows: Vec<Vec<usize>> = vec![Vec::new(); rank_count];
    for v in 0..node_count {
        rows[ranks[v]].push(v);
    }

    if rows.len() <= 1 {
        return rows;
    }

    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut succs: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(from, to) in edges {
        preds[to].push(from);
        succs[from].push(to);
    }

    // Position of each node within its row, updated after every re-sort.
    let mut pos = vec![0usize; node_count];
    for row in rows.iter() {
        for (i, &v) in row.iter().enumerate() {
            pos[v] = i;
        }
    }

    // Forward pass: pull nodes under their predecessors.
    for r in 1..rows.len() {
        sort_by_barycenter(&mut rows[r], &preds, &pos);
        for (i, &v) in rows[r].iter().enumerate() {
            pos[v] = i;
        }
    }

    // Backward pass: pull nodes over their successors.
    for r in (0..rows.len() - 1).rev() {
        sort_by_barycenter(&mut rows[r], &succs, &pos);
        for (i, &v) in rows[r].iter().enumerate() {
            pos[v] = i;
        }
    }

    rows
}

fn sort_by_barycenter(row: &mut Vec<usize>, neighbours: &[Vec<usize>], pos: &[usize]) {
    let mut keyed: Vec<(usize, f64)> = row
        .iter()
        .map(|&v| {
            let ns = &neighbours[v];
            let key = if ns.is_empty() {
                f64::MAX
            } else {
                ns.iter().map(|&n| pos[n] as f64).sum::<f64>() / ns.len() as f64
            };
            (v, key)
        })
        .collect();

    keyed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    *row = keyed.into_iter().map(|(v, _)| v).collect();
}
