use crate::consts::*;
use crate::error::{CurveError, CurveResult};
use super::{exp_with, log_with, narrow, widen, U256, U1024};
use super::{ExpHiTerm, ExpLoTerm, LogHiTerm, LogLoTerm};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpTables {
    pub hi: Vec<ExpHiTerm>,
    pub lo: Vec<ExpLoTerm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogTables {
    pub hi: Vec<LogHiTerm>,
    pub lo: Vec<LogLoTerm>,
}

impl ExpTables {
    /// Largest input the tables accept.
    pub fn max_input(&self) -> U256 {
        self.hi.last().map_or(U256::zero(), |t| t.bit.saturating_sub(U256::one()))
    }
}

impl LogTables {
    pub fn max_input(&self) -> U256 {
        self.hi.first().map_or(U256::zero(), |t| t.exp.saturating_sub(U256::one()))
    }
}

fn hp_one() -> U1024 {
    U1024::one() << BUILDER_PRECISION
}

/// e^(num/den) at BUILDER_PRECISION fractional bits, from the Taylor series.
/// Every term is rounded down, so the sum never exceeds the true value.
fn hp_exp(num: U1024, den: U1024) -> CurveResult<U1024> {
    let x = (num << BUILDER_PRECISION)
        .checked_div(den)
        .ok_or(CurveError::overflow("hp_exp"))?;

    let mut sum = hp_one();
    let mut term = hp_one();
    let mut k = 1u64;
    loop {
        term = term.checked_mul(x).ok_or(CurveError::overflow("hp_exp"))? >> BUILDER_PRECISION;
        term = term / U1024::from(k);
        if term.is_zero() {
            break;
        }
        sum = sum.checked_add(term).ok_or(CurveError::overflow("hp_exp"))?;
        k += 1;
    }

    Ok(sum)
}

/// e^(2^e) at builder precision
fn hp_exp_pow2(e: i32) -> CurveResult<U1024> {
    let num = U1024::one() << e.max(0) as usize;
    let den = U1024::one() << (-e).max(0) as usize;
    hp_exp(num, den)
}

/// Drops a builder-precision value to the runtime fixed-point scale.
fn to_runtime(value: U1024) -> CurveResult<U1024> {
    let scaled = value
        .checked_mul(widen(FIXED_ONE))
        .ok_or(CurveError::overflow("to_runtime"))?;
    Ok(scaled >> BUILDER_PRECISION)
}

/// e^(x / FIXED_ONE) * FIXED_ONE, rounded down, computed at builder precision.
pub fn reference_exp(x: U256) -> CurveResult<U256> {
    narrow(to_runtime(hp_exp(widen(x), widen(FIXED_ONE))?)?)
}

fn factorial(n: usize) -> CurveResult<U256> {
    (2..=n).try_fold(U256::one(), |acc, k| {
        acc.checked_mul(U256::from(k)).ok_or(CurveError::overflow("factorial"))
    })
}

/// Taylor coefficients of degree `n` over the common divisor n!.
fn exp_lo_terms(n: usize) -> CurveResult<Vec<ExpLoTerm>> {
    let total = factorial(n)?;
    (0..n)
        .map(|i| {
            Ok(ExpLoTerm {
                val: total / factorial(i + 1)?,
                ind: (i + 1) as u32,
            })
        })
        .collect()
}

/// Derives the exp tables for inputs below 2^max_hi_term_val.
///
/// The hi terms cover the bit positions `max_hi_term_val - num_of_hi_terms`
/// through `max_hi_term_val - 1`. Each fraction is sized against the largest
/// intermediate seen so far, so applying every fraction in sequence stays
/// within TARGET_BITS. The polynomial then grows one degree at a time for as
/// long as the result at the largest input keeps increasing.
pub fn build_exp_tables(max_hi_term_val: u32, num_of_hi_terms: u32) -> CurveResult<ExpTables> {
    let b = max_hi_term_val as i32;
    let k = num_of_hi_terms as i32;
    let limit = widen(U256::max_value()) << BUILDER_PRECISION;

    let mut top = to_runtime(hp_exp_pow2(b - k)?)? - U1024::one();
    let mut hi = Vec::with_capacity(num_of_hi_terms as usize + 1);
    for n in 0..=k {
        let cur = hp_exp_pow2(n + b - k)?;
        let span = cur.checked_mul(top).ok_or(CurveError::overflow("build_exp"))?;
        let den = limit / span;
        if den.is_zero() {
            return Err(CurveError::overflow("build_exp"));
        }
        let num = (den * cur) >> BUILDER_PRECISION;
        top = top * num / den;

        let bit = (FIXED_ONE << (n + b) as usize) >> k as usize;
        hi.push(ExpHiTerm {
            bit,
            num: narrow(num)?,
            den: narrow(den)?,
        });
    }

    let mut tables = ExpTables { hi, lo: exp_lo_terms(1)? };
    let max = tables.max_input();
    let mut best = exp_with(max, &tables.hi, &tables.lo)?;
    loop {
        let candidate = exp_lo_terms(tables.lo.len() + 1)?;
        match exp_with(max, &tables.hi, &candidate) {
            Ok(res) if res > best => {
                best = res;
                tables.lo = candidate;
            }
            _ => break,
        }
    }

    tracing::debug!(hi = tables.hi.len(), lo = tables.lo.len(), "built exp tables");
    Ok(tables)
}

/// Derives the log tables for inputs in [1, e^max_hi_term_val).
pub fn build_log_tables(max_hi_term_val: u32, num_of_hi_terms: u32) -> CurveResult<LogTables> {
    let e = U256::from(max_hi_term_val);
    let mut hi = Vec::with_capacity(num_of_hi_terms as usize + 1);
    for n in 0..=num_of_hi_terms as usize {
        let exp = hp_exp(widen(e), U1024::one() << n)?;
        hi.push(LogHiTerm {
            val: (FIXED_ONE * e) >> n,
            exp: narrow(to_runtime(exp)?)?,
        });
    }

    let two = FIXED_ONE << 1;
    let mut tables = LogTables {
        hi,
        lo: vec![LogLoTerm { num: two, den: two }],
    };
    let max = tables.max_input();
    let mut best = log_with(max, &tables.hi, &tables.lo)?;
    loop {
        let n = tables.lo.len() as u64;
        let den = FIXED_ONE * U256::from(2 * n + 2);
        let mut candidate = tables.lo.clone();
        candidate.push(LogLoTerm {
            num: den / U256::from(2 * n + 1),
            den,
        });

        match log_with(max, &tables.hi, &candidate) {
            Ok(res) if res > best => {
                best = res;
                tables.lo = candidate;
            }
            _ => break,
        }
    }

    tracing::debug!(hi = tables.hi.len(), lo = tables.lo.len(), "built log tables");
    Ok(tables)
}

pub fn build_default_tables() -> CurveResult<(ExpTables, LogTables)> {
    Ok((
        build_exp_tables(EXP_MAX_HI_TERM_VAL, EXP_NUM_OF_HI_TERMS)?,
        build_log_tables(LOG_MAX_HI_TERM_VAL, LOG_NUM_OF_HI_TERMS)?,
    ))
}

fn limbs(value: &U256) -> String {
    format!(
        "U256([{:#018x}, {:#018x}, {:#018x}, {:#018x}])",
        value.0[0], value.0[1], value.0[2], value.0[3]
    )
}

/// Renders the tables as the Rust source of `math/tables.rs`.
pub fn render_tables(exp: &ExpTables, log: &LogTables) -> String {
    let mut out = String::new();
    out.push_str("// Generated by `epochcurve tables`. Do not edit by hand.\n\n");
    out.push_str("use super::{ExpHiTerm, ExpLoTerm, LogHiTerm, LogLoTerm, U256};\n\n");

    out.push_str(&format!("pub const EXP_HI_TERMS: [ExpHiTerm; {}] = [\n", exp.hi.len()));
    for term in &exp.hi {
        out.push_str("    ExpHiTerm {\n");
        out.push_str(&format!("        bit: {},\n", limbs(&term.bit)));
        out.push_str(&format!("        num: {},\n", limbs(&term.num)));
        out.push_str(&format!("        den: {},\n", limbs(&term.den)));
        out.push_str("    },\n");
    }
    out.push_str("];\n\n");

    out.push_str(&format!("pub const EXP_LO_TERMS: [ExpLoTerm; {}] = [\n", exp.lo.len()));
    for term in &exp.lo {
        out.push_str(&format!("    ExpLoTerm {{ val: {}, ind: {} }},\n", limbs(&term.val), term.ind));
    }
    out.push_str("];\n\n");

    out.push_str(&format!("pub const LOG_HI_TERMS: [LogHiTerm; {}] = [\n", log.hi.len()));
    for term in &log.hi {
        out.push_str("    LogHiTerm {\n");
        out.push_str(&format!("        val: {},\n", limbs(&term.val)));
        out.push_str(&format!("        exp: {},\n", limbs(&term.exp)));
        out.push_str("    },\n");
    }
    out.push_str("];\n\n");

    out.push_str(&format!("pub const LOG_LO_TERMS: [LogLoTerm; {}] = [\n", log.lo.len()));
    for term in &log.lo {
        out.push_str("    LogLoTerm {\n");
        out.push_str(&format!("        num: {},\n", limbs(&term.num)));
        out.push_str(&format!("        den: {},\n", limbs(&term.den)));
        out.push_str("    },\n");
    }
    out.push_str("];\n");

    out
}
