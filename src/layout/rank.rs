// src/layout/rank.rs

use std::collections::{HashSet, VecDeque};

/// Produce an acyclic edge set by reversing the edges that close a cycle.
///
/// Depth-first search in node order; an edge pointing back into the active
/// search path is reversed, everything else is kept as-is. Self-edges are
/// dropped since they carry no ordering information. The reversal only
/// affects ranking; callers keep rendering the original edge direction.
pub fn break_cycles(node_count: usize, edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(from, to) in edges {
        if from != to {
            out[from].push(to);
        }
    }

    enum Visit {
        Enter(usize),
        Exit(usize),
    }

    let mut reversed: HashSet<(usize, usize)> = HashSet::new();
    let mut visited = vec![false; node_count];
    let mut on_path = vec![false; node_count];
    let mut stack: Vec<Visit> = (0..node_count).rev().map(Visit::Enter).collect();

    while let Some(item) = stack.pop() {
        match item {
            Visit::Exit(v) => on_path[v] = false,
            Visit::Enter(v) => {
                if visited[v] {
                    continue;
                }
                visited[v] = true;
                on_path[v] = true;
                stack.push(Visit::Exit(v));

                for &w in out[v].iter().rev() {
                    if on_path[w] {
                        reversed.insert((v, w));
                    } else {
                        stack.push(Visit::Enter(w));
                    }
                }
            }
        }
    }

    let mut acyclic: Vec<(usize, usize)> = Vec::with_capacity(edges.len());
    for &(from, to) in edges {
        if from == to {
            continue;
        }
        let edge = if reversed.contains(&(from, to)) {
            (to, from)
        } else {
            (from, to)
        };
        // Reversal can collide with an existing forward edge.
        if !acyclic.contains(&edge) {
            acyclic.push(edge);
        }
    }

    acyclic
}

/// Longest-path layering over an acyclic edge set.
///
/// Every node starts at rank 0; processing nodes in topological order
/// pushes each edge target below the deepest of its sources, so
/// `rank(to) > rank(from)` holds for every edge. Nodes a topological
/// traversal cannot reach (only possible on cyclic input) stay at rank 0.
pub fn assign_ranks(node_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut in_degree = vec![0usize; node_count];
    for &(from, to) in edges {
        out[from].push(to);
        in_degree[to] += 1;
    }

    let mut ranks = vec![0usize; node_count];
    let mut queue: VecDeque<usize> = (0..node_count).filter(|&v| in_degree[v] == 0).collect();

    while let Some(v) = queue.pop_front() {
        for &w in out[v].iter() {
            if ranks[v] + 1 > ranks[w] {
                ranks[w] = ranks[v] + 1;
            }
            in_degree[w] -= 1;
            if in_degree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    ranks
}
