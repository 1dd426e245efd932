use super::simplify::Poly;
use super::{Expr, Rational, Symbol};

/// Solves the equation `lhs = 0` for `var` in closed form
///
/// The left-hand side must be polynomial in `var` (after expansion) with degree one
/// or two. A root at the origin is discarded when a non-trivial root exists,
/// e.g., `s (a s + b) = 0` yields only `s = -b/a`.
///
/// Returns an empty list if `var` does not appear, if the degree is not supported,
/// or if `var` appears in a non-polynomial way. Quadratic roots are returned as
/// `[(-b + √Δ)/2a, (-b - √Δ)/2a]`.
pub fn solve(lhs: &Expr, var: &Symbol) -> Vec<Expr> {
    let coefficients = match Poly::from_expr(lhs).coefficients(var) {
        Some(c) => c,
        None => return Vec::new(),
    };
    let (lowest, highest) = match (coefficients.keys().next(), coefficients.keys().next_back()) {
        (Some(l), Some(h)) => (*l, *h),
        _ => return Vec::new(), // 0 = 0
    };
    let shift = if highest > lowest { lowest } else { 0 };
    let coef = |k: u32| match coefficients.get(&(k + shift)) {
        Some(p) => p.clone(),
        None => Poly::default(),
    };
    match highest - shift {
        1 => {
            // c₁ x + c₀ = 0
            let c0 = coef(0);
            let c1 = coef(1);
            let x = c0.scale(-Rational::one()).mul(&c1.pow(-Rational::one()));
            vec![x.to_expr()]
        }
        2 => {
            // a x² + b x + c = 0
            let (a, b, c) = (coef(2), coef(1), coef(0));
            let disc = b.mul(&b).add(&a.mul(&c).scale(Rational::integer(-4)));
            let root = disc.pow(Rational::new(1, 2));
            let den = a.scale(Rational::integer(2)).pow(-Rational::one());
            let minus_b = b.scale(-Rational::one());
            vec![
                minus_b.add(&root).mul(&den).to_expr(),
                minus_b.add(&root.scale(-Rational::one())).mul(&den).to_expr(),
            ]
        }
        _ => Vec::new(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
