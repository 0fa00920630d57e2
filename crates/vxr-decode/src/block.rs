//! The decode root: binding one lifted superblock.
//!
//! [`Block::from_raw`] is the only place producer memory is trusted, so
//! everything structural is validated there: counts against capacities,
//! every link that must not be null, every statement tag, the type code
//! of every temporary, and the terminal jump kind. After a successful
//! bind the accessors are total over `[0, used)` and return `None` past
//! it instead of touching adjacent memory.

use std::fmt;
use std::slice;

use vxr_ir::{IrJumpKind, IrTemp, IrType};

use crate::raw::{RawSb, RawStmt};
use crate::{DecodeError, ExprRef, Result, StmtRef};

/// Read-only view of one lifted superblock.
///
/// Borrows the producer's buffers; the producer keeps ownership and the
/// view must not outlive the lift call's validity window.
pub struct Block<'a> {
    raw: &'a RawSb,
    tyenv: &'a [u32],
    stmts: &'a [*const RawStmt],
    next: ExprRef<'a>,
    jumpkind: IrJumpKind,
}

impl<'a> Block<'a> {
    /// Binds a producer superblock.
    ///
    /// A null handle means the lift call produced nothing and surfaces as
    /// [`DecodeError::ProducerFailure`]; any structural damage surfaces
    /// as the matching [`DecodeError`] without reading past it.
    ///
    /// # Safety
    ///
    /// Caller must ensure `ptr` is null or points to a fully populated
    /// producer superblock that stays valid and unmodified for `'a`.
    pub unsafe fn from_raw(ptr: *const RawSb) -> Result<Self> {
        if ptr.is_null() {
            return Err(DecodeError::ProducerFailure);
        }
        let raw = unsafe { &*ptr };

        if raw.tyenv.is_null() {
            return Err(DecodeError::NullLink("tyenv"));
        }
        let te = unsafe { &*raw.tyenv };
        if te.types_used < 0 || te.types_used > te.types_size {
            return Err(DecodeError::BadCounts {
                what: "tyenv",
                used: te.types_used,
                size: te.types_size,
            });
        }
        let tyenv: &[u32] = if te.types_used == 0 {
            &[]
        } else if te.types.is_null() {
            return Err(DecodeError::NullLink("tyenv types"));
        } else {
            unsafe { slice::from_raw_parts(te.types, te.types_used as usize) }
        };
        for &code in tyenv {
            IrType::from_code(code)?;
        }

        if raw.stmts_used < 0 || raw.stmts_used > raw.stmts_size {
            return Err(DecodeError::BadCounts {
                what: "stmts",
                used: raw.stmts_used,
                size: raw.stmts_size,
            });
        }
        let stmts: &[*const RawStmt] = if raw.stmts_used == 0 {
            &[]
        } else if raw.stmts.is_null() {
            return Err(DecodeError::NullLink("stmts"));
        } else {
            unsafe { slice::from_raw_parts(raw.stmts, raw.stmts_used as usize) }
        };
        for &entry in stmts {
            unsafe { StmtRef::new(entry, "statement")? };
        }

        let next = unsafe { ExprRef::new(raw.next, "next")? };
        let jumpkind = IrJumpKind::from_code(raw.jumpkind)?;

        Ok(Self {
            raw,
            tyenv,
            stmts,
            next,
            jumpkind,
        })
    }

    /// Number of statements in use, not the backing capacity.
    #[must_use]
    pub const fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Capacity of the producer's statement table, which may exceed the
    /// used count.
    #[must_use]
    pub const fn stmt_capacity(&self) -> usize {
        self.raw.stmts_size as usize
    }

    /// Statement at `index`, or `None` at or past the used count.
    #[must_use]
    pub fn stmt(&self, index: usize) -> Option<StmtRef<'a>> {
        let entry = *self.stmts.get(index)?;
        // Entries were null-checked and tag-checked when the block was bound.
        unsafe { StmtRef::new(entry, "statement") }.ok()
    }

    /// Iterates the used statements in execution order.
    pub fn stmts(&self) -> impl Iterator<Item = StmtRef<'a>> + '_ {
        (0..self.stmt_count()).filter_map(|index| self.stmt(index))
    }

    /// Number of temporaries the type environment declares.
    #[must_use]
    pub const fn temp_count(&self) -> usize {
        self.tyenv.len()
    }

    /// Type of `tmp`, or `None` at or past the environment's used count.
    #[must_use]
    pub fn temp_type(&self, tmp: IrTemp) -> Option<IrType> {
        self.tyenv
            .get(tmp.index())
            .and_then(|&code| IrType::from_code(code).ok())
    }

    /// Types of all temporaries in index order.
    pub fn temp_types(&self) -> impl Iterator<Item = IrType> + '_ {
        self.tyenv
            .iter()
            .map(|&code| IrType::from_code(code).unwrap_or(IrType::Invalid))
    }

    /// The terminal destination expression.
    #[must_use]
    pub const fn next(&self) -> ExprRef<'a> {
        self.next
    }

    /// How control leaves through the terminal transfer.
    #[must_use]
    pub const fn jumpkind(&self) -> IrJumpKind {
        self.jumpkind
    }

    /// Guest-state offset of the instruction pointer register.
    #[must_use]
    pub const fn offs_ip(&self) -> i32 {
        self.raw.offs_ip
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IRSB {\n")?;
        for (i, ty) in self.temp_types().enumerate() {
            if i % 8 == 0 {
                f.write_str("   ")?;
            }
            write!(f, "t{i}:{ty}")?;
            if i % 8 == 7 {
                f.write_str("\n")?;
            } else {
                f.write_str("   ")?;
            }
        }
        if self.temp_count() % 8 != 0 {
            f.write_str("\n")?;
        }
        f.write_str("\n")?;
        for stmt in self.stmts() {
            writeln!(f, "   {stmt}")?;
        }
        writeln!(
            f,
            "   PUT({}) = {}; exit-{}",
            self.offs_ip(),
            self.next,
            self.jumpkind
        )?;
        f.write_str("}\n")
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use vxr_ir::{IrConstTag, IrError, IrExprTag, IrStmtTag};

    use super::*;
    use crate::raw::{
        RawConst, RawConstValue, RawExpr, RawExprPayload, RawIMark, RawStmtPayload, RawTypeEnv,
    };

    struct Fixture {
        con: RawConst,
        next: RawExpr,
        types: [u32; 2],
        imark: RawStmt,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                con: RawConst {
                    tag: IrConstTag::U64 as u32,
                    value: RawConstValue { u64: 0x1004 },
                },
                next: RawExpr {
                    tag: IrExprTag::Const as u32,
                    payload: RawExprPayload { con: ptr::null() },
                },
                types: [IrType::I64 as u32, IrType::I32 as u32],
                imark: RawStmt {
                    tag: IrStmtTag::IMark as u32,
                    payload: RawStmtPayload {
                        imark: RawIMark { addr: 0x1000, len: 4, delta: 0 },
                    },
                },
            }
        }
    }

    #[test]
    fn test_null_handle_is_a_producer_failure() {
        let err = unsafe { Block::from_raw(ptr::null()) }.err().unwrap();
        assert!(matches!(err, DecodeError::ProducerFailure));
    }

    #[test]
    fn test_binds_and_bounds_checks() {
        let mut fx = Fixture::new();
        fx.next.payload = RawExprPayload { con: &raw const fx.con };
        let stmts: [*const RawStmt; 4] =
            [&raw const fx.imark, ptr::null(), ptr::null(), ptr::null()];
        let tyenv = RawTypeEnv {
            types: fx.types.as_ptr(),
            types_size: 2,
            types_used: 2,
        };
        let sb = RawSb {
            tyenv: &raw const tyenv,
            stmts: stmts.as_ptr(),
            stmts_size: 4,
            stmts_used: 1,
            next: &raw const fx.next,
            jumpkind: IrJumpKind::Boring as u32,
            offs_ip: 184,
        };
        let block = unsafe { Block::from_raw(&raw const sb) }.unwrap();

        assert_eq!(block.stmt_count(), 1);
        assert_eq!(block.stmt_capacity(), 4);
        assert_eq!(block.temp_count(), 2);
        assert_eq!(block.offs_ip(), 184);
        assert_eq!(block.jumpkind(), IrJumpKind::Boring);

        let m = block.stmt(0).unwrap().as_imark().unwrap();
        assert_eq!(m.addr, 0x1000);

        // Used count, not capacity, is the boundary.
        assert!(block.stmt(1).is_none());
        assert!(block.stmt(4).is_none());
        assert!(block.stmt(usize::MAX).is_none());

        assert_eq!(block.temp_type(IrTemp(0)), Some(IrType::I64));
        assert_eq!(block.temp_type(IrTemp(1)), Some(IrType::I32));
        assert_eq!(block.temp_type(IrTemp(2)), None);

        assert_eq!(block.next().as_const().unwrap().as_addr(), Some(0x1004));
    }

    #[test]
    fn test_rejects_count_overruns() {
        let fx = Fixture::new();
        let tyenv = RawTypeEnv {
            types: fx.types.as_ptr(),
            types_size: 1,
            types_used: 2,
        };
        let sb = RawSb {
            tyenv: &raw const tyenv,
            stmts: ptr::null(),
            stmts_size: 0,
            stmts_used: 0,
            next: ptr::null(),
            jumpkind: IrJumpKind::Boring as u32,
            offs_ip: 0,
        };
        assert!(matches!(
            unsafe { Block::from_raw(&raw const sb) },
            Err(DecodeError::BadCounts { what: "tyenv", used: 2, size: 1 })
        ));
    }

    #[test]
    fn test_rejects_null_links() {
        let tyenv = RawTypeEnv {
            types: ptr::null(),
            types_size: 0,
            types_used: 0,
        };
        let sb = RawSb {
            tyenv: &raw const tyenv,
            stmts: ptr::null(),
            stmts_size: 2,
            stmts_used: 1,
            next: ptr::null(),
            jumpkind: IrJumpKind::Boring as u32,
            offs_ip: 0,
        };
        assert!(matches!(
            unsafe { Block::from_raw(&raw const sb) },
            Err(DecodeError::NullLink("stmts"))
        ));

        let empty = RawSb {
            stmts_size: 0,
            stmts_used: 0,
            ..sb
        };
        assert!(matches!(
            unsafe { Block::from_raw(&raw const empty) },
            Err(DecodeError::NullLink("next"))
        ));
    }

    #[test]
    fn test_rejects_unknown_type_codes() {
        let mut fx = Fixture::new();
        fx.types[1] = 0x1110;
        let tyenv = RawTypeEnv {
            types: fx.types.as_ptr(),
            types_size: 2,
            types_used: 2,
        };
        let sb = RawSb {
            tyenv: &raw const tyenv,
            stmts: ptr::null(),
            stmts_size: 0,
            stmts_used: 0,
            next: ptr::null(),
            jumpkind: IrJumpKind::Boring as u32,
            offs_ip: 0,
        };
        assert!(matches!(
            unsafe { Block::from_raw(&raw const sb) },
            Err(DecodeError::UnknownEnumValue(IrError::UnknownEnum {
                what: "IRType",
                code: 0x1110
            }))
        ));
    }

    #[test]
    fn test_empty_block_binds_and_renders() {
        let mut fx = Fixture::new();
        fx.next.payload = RawExprPayload { con: &raw const fx.con };
        let tyenv = RawTypeEnv {
            types: ptr::null(),
            types_size: 0,
            types_used: 0,
        };
        let sb = RawSb {
            tyenv: &raw const tyenv,
            stmts: ptr::null(),
            stmts_size: 0,
            stmts_used: 0,
            next: &raw const fx.next,
            jumpkind: IrJumpKind::Ret as u32,
            offs_ip: 184,
        };
        let block = unsafe { Block::from_raw(&raw const sb) }.unwrap();
        assert_eq!(block.stmt_count(), 0);
        assert!(block.stmt(0).is_none());
        assert_eq!(
            block.to_string(),
            "IRSB {\n\n   PUT(184) = 0x1004:I64; exit-Ret\n}\n"
        );
    }
}
