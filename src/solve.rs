use crate::ast::{Expr, ExprRef, Op};

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Solution {
    pub expr: ExprRef,
    pub value: i64,
}

/// Exhaustive Countdown search: combine the numbers pairwise with the four
/// operators, each number used at most once, and keep the expression whose
/// value lands closest to the target (the earliest such on ties). Returns
/// `None` only for an empty pool.
pub fn solve(target: i64, numbers: &[i64]) -> Option<Solution> {
    let pool: Vec<(i64, ExprRef)> = numbers
        .iter()
        .map(|&n| (n, ExprRef::new(Expr::Num(n))))
        .collect();
    let mut best = None;
    for (value, expr) in &pool {
        offer(target, *value, expr, &mut best);
    }
    search(target, &pool, &mut best);
    best.map(|(_, solution)| solution)
}

fn offer(target: i64, value: i64, expr: &ExprRef, best: &mut Option<(i64, Solution)>) {
    let diff = (value - target).abs();
    if best.as_ref().map_or(true, |(d, _)| diff < *d) {
        *best = Some((
            diff,
            Solution {
                expr: expr.clone(),
                value,
            },
        ));
    }
}

// Combinations are normalized to x >= y and pruned: `-` never reaches zero
// or negatives, `*` and `/` never touch 1, `/` must be exact. Normalizing
// also keeps a pool `0` out of the numerator, so `0 / y` is never tried;
// nothing is lost, a literal 0 is already its own candidate. Equal values
// in the pool are only tried once per level.
fn combinations(x: i64, y: i64) -> Vec<(Op, i64)> {
    let mut ops = vec![(Op::Add, x + y)];
    if x > y {
        ops.push((Op::Sub, x - y));
    }
    if x > 1 && y > 1 {
        ops.push((Op::Mul, x * y));
    }
    if y > 1 && x % y == 0 {
        ops.push((Op::Div, x / y));
    }
    ops
}

fn search(target: i64, pool: &[(i64, ExprRef)], best: &mut Option<(i64, Solution)>) {
    for i in 0..pool.len() {
        if pool[..i].iter().any(|(v, _)| *v == pool[i].0) {
            continue;
        }
        for j in i + 1..pool.len() {
            if pool[i + 1..j].iter().any(|(v, _)| *v == pool[j].0) {
                continue;
            }
            let ((x, ex), (y, ey)) = if pool[i].0 >= pool[j].0 {
                (&pool[i], &pool[j])
            } else {
                (&pool[j], &pool[i])
            };
            for (op, value) in combinations(*x, *y) {
                let expr = Expr::bin(op, ex.clone(), ey.clone());
                offer(target, value, &expr, best);
                let mut rest: Vec<(i64, ExprRef)> = pool
                    .iter()
                    .enumerate()
                    .filter(|(k, _)| *k != i && *k != j)
                    .map(|(_, entry)| entry.clone())
                    .collect();
                rest.push((value, expr));
                search(target, &rest, best);
            }
        }
    }
}
