//! Block consistency checking.
//!
//! Producers are trusted to emit well-formed blocks; this pass makes
//! the trust checkable. It reports issues instead of failing so a
//! caller can log everything wrong with a block at once.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;
use vxr_decode::{Block, DecodeError, Expr, ExprRef, Stmt};
use vxr_ir::{IrTemp, IrType};

use crate::shallow_type;

/// One violation of the block's structural laws.
#[derive(Error, Debug)]
pub enum CheckIssue {
    /// A temporary was assigned by more than one statement. Assignment
    /// covers plain writes, guarded loads, atomics, and call results.
    #[error("Statement {stmt_idx} assigns t{tmp} a second time")]
    MultipleAssignment { tmp: u32, stmt_idx: usize },
    /// A written value's type disagrees with the temporary's declared
    /// type, where the value's type can be read off the expression.
    #[error("Statement {stmt_idx} writes {written} into t{tmp} declared {declared}")]
    TypeDisagreement {
        tmp: u32,
        declared: IrType,
        written: IrType,
        stmt_idx: usize,
    },
    /// A temporary id with no slot in the type environment.
    #[error("Statement {stmt_idx} uses t{tmp} which has no declared type")]
    UndeclaredTemp { tmp: u32, stmt_idx: usize },
    /// A statement or one of its expressions failed to decode.
    #[error("Statement {stmt_idx} does not decode: {source}")]
    Undecodable {
        stmt_idx: usize,
        source: DecodeError,
    },
}

/// Checks the block's structural laws and returns every violation.
///
/// Diagnostic only: a block with issues is still readable through its
/// view, this just tells you how far to trust it. Issues found in the
/// terminal next expression report the statement count as their index.
#[must_use]
pub fn check_block(block: &Block<'_>) -> Vec<CheckIssue> {
    let mut issues = Vec::new();
    let mut written: FxHashSet<u32> = FxHashSet::default();

    for (stmt_idx, stmt) in block.stmts().enumerate() {
        let decoded = match stmt.decode() {
            Ok(decoded) => decoded,
            Err(source) => {
                issues.push(CheckIssue::Undecodable { stmt_idx, source });
                continue;
            }
        };

        for tmp in assigned_temps(&decoded) {
            if !written.insert(tmp.0) {
                issues.push(CheckIssue::MultipleAssignment {
                    tmp: tmp.0,
                    stmt_idx,
                });
            }
            if block.temp_type(tmp).is_none() {
                issues.push(CheckIssue::UndeclaredTemp {
                    tmp: tmp.0,
                    stmt_idx,
                });
            }
        }

        if let Stmt::WrTmp(w) = &decoded {
            if let (Some(declared), Some(written_ty)) =
                (block.temp_type(w.tmp), shallow_type(block, w.data))
            {
                if declared != written_ty {
                    issues.push(CheckIssue::TypeDisagreement {
                        tmp: w.tmp.0,
                        declared,
                        written: written_ty,
                        stmt_idx,
                    });
                }
            }
        }

        for expr in stmt_exprs(&decoded) {
            walk_expr(block, expr, stmt_idx, &mut issues);
        }
    }

    walk_expr(block, block.next(), block.stmt_count(), &mut issues);

    if !issues.is_empty() {
        debug!(count = issues.len(), "block failed consistency check");
    }
    issues
}

/// Temporaries the statement assigns.
fn assigned_temps(stmt: &Stmt<'_>) -> Vec<IrTemp> {
    match stmt {
        Stmt::WrTmp(w) => vec![w.tmp],
        Stmt::LoadG(l) => vec![l.dst],
        Stmt::Llsc(l) => vec![l.result],
        Stmt::Cas(c) => {
            let mut tmps = vec![c.old_lo];
            if let Some(hi) = c.old_hi {
                tmps.push(hi);
            }
            tmps
        }
        Stmt::Dirty(d) => d.tmp.into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Immediate expression children of the statement.
fn stmt_exprs<'a>(stmt: &Stmt<'a>) -> Vec<ExprRef<'a>> {
    match stmt {
        Stmt::NoOp | Stmt::IMark(_) | Stmt::Mbe(_) => Vec::new(),
        Stmt::AbiHint(h) => vec![h.base, h.nia],
        Stmt::Put(p) => vec![p.data],
        Stmt::PutI(p) => vec![p.ix, p.data],
        Stmt::WrTmp(w) => vec![w.data],
        Stmt::Store(s) => vec![s.addr, s.data],
        Stmt::StoreG(s) => vec![s.addr, s.data, s.guard],
        Stmt::LoadG(l) => vec![l.addr, l.alt, l.guard],
        Stmt::Cas(c) => {
            let mut exprs = vec![c.addr, c.expd_lo, c.data_lo];
            exprs.extend(c.expd_hi);
            exprs.extend(c.data_hi);
            exprs
        }
        Stmt::Llsc(l) => {
            let mut exprs = vec![l.addr];
            exprs.extend(l.storedata);
            exprs
        }
        Stmt::Dirty(d) => {
            let mut exprs = vec![d.guard];
            exprs.extend(d.args.iter().copied());
            if let Some(mem) = &d.mem {
                exprs.push(mem.addr);
            }
            exprs
        }
        Stmt::Exit(e) => vec![e.guard],
    }
}

fn walk_expr(
    block: &Block<'_>,
    expr: ExprRef<'_>,
    stmt_idx: usize,
    issues: &mut Vec<CheckIssue>,
) {
    let decoded = match expr.decode() {
        Ok(decoded) => decoded,
        Err(source) => {
            issues.push(CheckIssue::Undecodable { stmt_idx, source });
            return;
        }
    };
    match decoded {
        Expr::RdTmp(t) => {
            if block.temp_type(t).is_none() {
                issues.push(CheckIssue::UndeclaredTemp {
                    tmp: t.0,
                    stmt_idx,
                });
            }
        }
        Expr::GetI(g) => walk_expr(block, g.ix, stmt_idx, issues),
        Expr::Qop(q) => {
            for arg in q.args {
                walk_expr(block, arg, stmt_idx, issues);
            }
        }
        Expr::Triop(t) => {
            for arg in t.args {
                walk_expr(block, arg, stmt_idx, issues);
            }
        }
        Expr::Binop(b) => {
            walk_expr(block, b.arg1, stmt_idx, issues);
            walk_expr(block, b.arg2, stmt_idx, issues);
        }
        Expr::Unop(u) => walk_expr(block, u.arg, stmt_idx, issues),
        Expr::Load(l) => walk_expr(block, l.addr, stmt_idx, issues),
        Expr::CCall(c) => {
            for arg in c.args {
                walk_expr(block, arg, stmt_idx, issues);
            }
        }
        Expr::Ite(i) => {
            walk_expr(block, i.cond, stmt_idx, issues);
            walk_expr(block, i.iftrue, stmt_idx, issues);
            walk_expr(block, i.iffalse, stmt_idx, issues);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use vxr_decode::synth::BlockSynth;
    use vxr_ir::{IrConst, IrEndness, IrLoadGOp, IrStmtTag, IrTemp, IrType};

    use super::*;

    #[test]
    fn test_clean_block_has_no_issues() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        synth.imark(0x1000, 4, 0);
        let x0 = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, x0);
        let data = synth.rd_tmp(t0);
        synth.put(32, data);
        let next = synth.constant(IrConst::U64(0x1004));
        synth.set_next(next);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert!(check_block(&block).is_empty());
    }

    #[test]
    fn test_double_assignment_flagged() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        let a = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, a);
        let b = synth.get(24, IrType::I64);
        synth.wr_tmp(t0, b);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let issues = check_block(&block);
        assert!(issues.iter().any(|i| matches!(
            i,
            CheckIssue::MultipleAssignment { tmp: 0, stmt_idx: 1 }
        )));
    }

    #[test]
    fn test_guarded_load_counts_as_assignment() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I32);
        let a = synth.get(16, IrType::I32);
        synth.wr_tmp(t0, a);
        let addr = synth.get(48, IrType::I64);
        let alt = synth.rd_tmp(t0);
        let guard = synth.constant(IrConst::U1(true));
        synth.load_g(IrEndness::Little, IrLoadGOp::ILGop_Ident32, t0, addr, alt, guard);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let issues = check_block(&block);
        assert!(issues
            .iter()
            .any(|i| matches!(i, CheckIssue::MultipleAssignment { tmp: 0, .. })));
    }

    #[test]
    fn test_type_disagreement_flagged() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I32);
        let wide = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, wide);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let issues = check_block(&block);
        assert!(issues.iter().any(|i| matches!(
            i,
            CheckIssue::TypeDisagreement {
                tmp: 0,
                declared: IrType::I32,
                written: IrType::I64,
                ..
            }
        )));
    }

    #[test]
    fn test_undeclared_temp_flagged() {
        let mut synth = BlockSynth::new();
        let ghost = synth.rd_tmp(IrTemp(7));
        synth.put(0, ghost);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let issues = check_block(&block);
        assert!(issues
            .iter()
            .any(|i| matches!(i, CheckIssue::UndeclaredTemp { tmp: 7, stmt_idx: 0 })));
    }

    #[test]
    fn test_corrupt_payload_reported_not_fatal() {
        // A valid statement tag whose detail pointer is null binds fine
        // and fails only when decoded.
        let mut synth = BlockSynth::new();
        synth.raw_stmt_tag(IrStmtTag::Cas as u32);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let issues = check_block(&block);
        assert!(issues
            .iter()
            .any(|i| matches!(i, CheckIssue::Undecodable { stmt_idx: 0, .. })));
    }

    #[test]
    fn test_issues_render() {
        let issue = CheckIssue::TypeDisagreement {
            tmp: 3,
            declared: IrType::I32,
            written: IrType::I64,
            stmt_idx: 5,
        };
        assert_eq!(
            issue.to_string(),
            "Statement 5 writes I64 into t3 declared I32"
        );
    }
}
