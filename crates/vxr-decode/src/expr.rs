//! Expression views.
//!
//! An [`ExprRef`] is a borrowed handle to one producer expression node
//! whose tag has already been validated. [`ExprRef::decode`] peels a
//! single level into an [`Expr`], re-validating every enum code and link
//! it touches; children come back as further `ExprRef`s, so a malformed
//! subtree is only discovered when the walk actually reaches it.

use std::ffi::CStr;
use std::fmt;

use vxr_ir::{IrConst, IrConstTag, IrEndness, IrExprTag, IrOp, IrTemp, IrType, RegArray};

use crate::raw::{RawCallee, RawConst, RawExpr, RawRegArray};
use crate::{DecodeError, Result};

/// Longest call argument vector accepted before the decoder assumes the
/// null terminator was lost to corruption.
pub const MAX_CALL_ARGS: usize = 32;

/// Borrowed, tag-checked handle to one expression node.
#[derive(Clone, Copy)]
pub struct ExprRef<'a> {
    raw: &'a RawExpr,
    tag: IrExprTag,
}

/// One decoded level of an expression tree.
#[derive(Clone)]
pub enum Expr<'a> {
    Binder(i32),
    Get(Get),
    GetI(GetI<'a>),
    RdTmp(IrTemp),
    Qop(Qop<'a>),
    Triop(Triop<'a>),
    Binop(Binop<'a>),
    Unop(Unop<'a>),
    Load(Load<'a>),
    Const(IrConst),
    CCall(CCall<'a>),
    Ite(Ite<'a>),
    VecRet,
    GsPtr,
}

/// Read of a fixed guest-state offset.
#[derive(Clone, Copy)]
pub struct Get {
    pub offset: i32,
    pub ty: IrType,
}

/// Read of a circular guest-state region at a runtime index.
#[derive(Clone, Copy)]
pub struct GetI<'a> {
    pub descr: RegArray,
    pub ix: ExprRef<'a>,
    pub bias: i32,
}

#[derive(Clone, Copy)]
pub struct Qop<'a> {
    pub op: IrOp,
    pub args: [ExprRef<'a>; 4],
}

#[derive(Clone, Copy)]
pub struct Triop<'a> {
    pub op: IrOp,
    pub args: [ExprRef<'a>; 3],
}

#[derive(Clone, Copy)]
pub struct Binop<'a> {
    pub op: IrOp,
    pub arg1: ExprRef<'a>,
    pub arg2: ExprRef<'a>,
}

#[derive(Clone, Copy)]
pub struct Unop<'a> {
    pub op: IrOp,
    pub arg: ExprRef<'a>,
}

/// Unconditional memory read.
#[derive(Clone, Copy)]
pub struct Load<'a> {
    pub end: IrEndness,
    pub ty: IrType,
    pub addr: ExprRef<'a>,
}

/// Call to a pure helper routine.
#[derive(Clone)]
pub struct CCall<'a> {
    pub callee: Callee<'a>,
    pub ret_ty: IrType,
    pub args: Vec<ExprRef<'a>>,
}

/// Strict conditional select; both arms are conceptually evaluated.
#[derive(Clone, Copy)]
pub struct Ite<'a> {
    pub cond: ExprRef<'a>,
    pub iftrue: ExprRef<'a>,
    pub iffalse: ExprRef<'a>,
}

/// Helper routine descriptor shared by pure and dirty calls.
#[derive(Clone, Copy)]
pub struct Callee<'a> {
    pub regparms: i32,
    pub name: &'a CStr,
    pub addr: usize,
    pub mcx_mask: u32,
}

impl<'a> ExprRef<'a> {
    /// Binds one expression node, validating the link and its tag.
    ///
    /// # Safety
    ///
    /// Caller must ensure `ptr` is null or points to a producer expression
    /// node that stays valid and unmodified for `'a`.
    pub(crate) unsafe fn new(ptr: *const RawExpr, what: &'static str) -> Result<Self> {
        if ptr.is_null() {
            return Err(DecodeError::NullLink(what));
        }
        let raw = unsafe { &*ptr };
        let tag = IrExprTag::from_code(raw.tag)?;
        Ok(Self { raw, tag })
    }

    #[must_use]
    pub const fn tag(self) -> IrExprTag {
        self.tag
    }

    /// Decodes this node one level deep.
    pub fn decode(self) -> Result<Expr<'a>> {
        Ok(match self.tag {
            IrExprTag::Binder => Expr::Binder(self.read_binder()),
            IrExprTag::Get => Expr::Get(self.read_get()?),
            IrExprTag::GetI => Expr::GetI(self.read_get_i()?),
            IrExprTag::RdTmp => Expr::RdTmp(self.read_rd_tmp()),
            IrExprTag::Qop => Expr::Qop(self.read_qop()?),
            IrExprTag::Triop => Expr::Triop(self.read_triop()?),
            IrExprTag::Binop => Expr::Binop(self.read_binop()?),
            IrExprTag::Unop => Expr::Unop(self.read_unop()?),
            IrExprTag::Load => Expr::Load(self.read_load()?),
            IrExprTag::Const => Expr::Const(self.read_const()?),
            IrExprTag::CCall => Expr::CCall(self.read_ccall()?),
            IrExprTag::Ite => Expr::Ite(self.read_ite()?),
            IrExprTag::VecRet => Expr::VecRet,
            IrExprTag::GsPtr => Expr::GsPtr,
        })
    }

    pub fn as_binder(self) -> Result<i32> {
        self.expect(IrExprTag::Binder)?;
        Ok(self.read_binder())
    }

    pub fn as_get(self) -> Result<Get> {
        self.expect(IrExprTag::Get)?;
        self.read_get()
    }

    pub fn as_get_i(self) -> Result<GetI<'a>> {
        self.expect(IrExprTag::GetI)?;
        self.read_get_i()
    }

    pub fn as_rd_tmp(self) -> Result<IrTemp> {
        self.expect(IrExprTag::RdTmp)?;
        Ok(self.read_rd_tmp())
    }

    pub fn as_qop(self) -> Result<Qop<'a>> {
        self.expect(IrExprTag::Qop)?;
        self.read_qop()
    }

    pub fn as_triop(self) -> Result<Triop<'a>> {
        self.expect(IrExprTag::Triop)?;
        self.read_triop()
    }

    pub fn as_binop(self) -> Result<Binop<'a>> {
        self.expect(IrExprTag::Binop)?;
        self.read_binop()
    }

    pub fn as_unop(self) -> Result<Unop<'a>> {
        self.expect(IrExprTag::Unop)?;
        self.read_unop()
    }

    pub fn as_load(self) -> Result<Load<'a>> {
        self.expect(IrExprTag::Load)?;
        self.read_load()
    }

    pub fn as_const(self) -> Result<IrConst> {
        self.expect(IrExprTag::Const)?;
        self.read_const()
    }

    pub fn as_ccall(self) -> Result<CCall<'a>> {
        self.expect(IrExprTag::CCall)?;
        self.read_ccall()
    }

    pub fn as_ite(self) -> Result<Ite<'a>> {
        self.expect(IrExprTag::Ite)?;
        self.read_ite()
    }

    fn expect(self, want: IrExprTag) -> Result<()> {
        if self.tag == want {
            Ok(())
        } else {
            Err(DecodeError::TagMismatch {
                expected: want.name(),
                actual: self.tag.name(),
            })
        }
    }

    /// Links inside a bound block stay within the producer's buffer, so a
    /// child pointer inherits the parent's validity window.
    fn child(self, ptr: *const RawExpr, what: &'static str) -> Result<ExprRef<'a>> {
        unsafe { Self::new(ptr, what) }
    }

    // The readers below interpret the payload union. Each is only reached
    // after the tag check in `new` or `expect` selected its variant.

    fn read_binder(self) -> i32 {
        unsafe { self.raw.payload.binder }
    }

    fn read_get(self) -> Result<Get> {
        let g = unsafe { self.raw.payload.get };
        Ok(Get {
            offset: g.offset,
            ty: IrType::from_code(g.ty)?,
        })
    }

    fn read_get_i(self) -> Result<GetI<'a>> {
        let g = unsafe { self.raw.payload.get_i };
        Ok(GetI {
            descr: unsafe { reg_array_from_raw(g.descr)? },
            ix: self.child(g.ix, "GetI index")?,
            bias: g.bias,
        })
    }

    fn read_rd_tmp(self) -> IrTemp {
        IrTemp(unsafe { self.raw.payload.rd_tmp })
    }

    fn read_qop(self) -> Result<Qop<'a>> {
        let ptr = unsafe { self.raw.payload.qop };
        if ptr.is_null() {
            return Err(DecodeError::NullLink("Qop details"));
        }
        let q = unsafe { *ptr };
        Ok(Qop {
            op: IrOp::from_code(q.op)?,
            args: [
                self.child(q.arg1, "Qop argument")?,
                self.child(q.arg2, "Qop argument")?,
                self.child(q.arg3, "Qop argument")?,
                self.child(q.arg4, "Qop argument")?,
            ],
        })
    }

    fn read_triop(self) -> Result<Triop<'a>> {
        let ptr = unsafe { self.raw.payload.triop };
        if ptr.is_null() {
            return Err(DecodeError::NullLink("Triop details"));
        }
        let t = unsafe { *ptr };
        Ok(Triop {
            op: IrOp::from_code(t.op)?,
            args: [
                self.child(t.arg1, "Triop argument")?,
                self.child(t.arg2, "Triop argument")?,
                self.child(t.arg3, "Triop argument")?,
            ],
        })
    }

    fn read_binop(self) -> Result<Binop<'a>> {
        let b = unsafe { self.raw.payload.binop };
        Ok(Binop {
            op: IrOp::from_code(b.op)?,
            arg1: self.child(b.arg1, "Binop argument")?,
            arg2: self.child(b.arg2, "Binop argument")?,
        })
    }

    fn read_unop(self) -> Result<Unop<'a>> {
        let u = unsafe { self.raw.payload.unop };
        Ok(Unop {
            op: IrOp::from_code(u.op)?,
            arg: self.child(u.arg, "Unop argument")?,
        })
    }

    fn read_load(self) -> Result<Load<'a>> {
        let l = unsafe { self.raw.payload.load };
        Ok(Load {
            end: IrEndness::from_code(l.end)?,
            ty: IrType::from_code(l.ty)?,
            addr: self.child(l.addr, "Load address")?,
        })
    }

    fn read_const(self) -> Result<IrConst> {
        unsafe { const_from_raw(self.raw.payload.con, "constant") }
    }

    fn read_ccall(self) -> Result<CCall<'a>> {
        let c = unsafe { self.raw.payload.ccall };
        Ok(CCall {
            callee: unsafe { callee_from_raw(c.cee)? },
            ret_ty: IrType::from_code(c.ret_ty)?,
            args: unsafe { call_args(c.args, "call argument")? },
        })
    }

    fn read_ite(self) -> Result<Ite<'a>> {
        let i = unsafe { self.raw.payload.ite };
        Ok(Ite {
            cond: self.child(i.cond, "ITE condition")?,
            iftrue: self.child(i.iftrue, "ITE arm")?,
            iffalse: self.child(i.iffalse, "ITE arm")?,
        })
    }
}

/// Decodes a constant node.
///
/// # Safety
///
/// Caller must ensure `ptr` is null or points to a producer constant that
/// stays valid for the call.
pub(crate) unsafe fn const_from_raw(ptr: *const RawConst, what: &'static str) -> Result<IrConst> {
    if ptr.is_null() {
        return Err(DecodeError::NullLink(what));
    }
    let raw = unsafe { &*ptr };
    let tag = IrConstTag::from_code(raw.tag)?;
    let v = &raw.value;
    Ok(match tag {
        IrConstTag::U1 => IrConst::U1(unsafe { v.u1 } != 0),
        IrConstTag::U8 => IrConst::U8(unsafe { v.u8 }),
        IrConstTag::U16 => IrConst::U16(unsafe { v.u16 }),
        IrConstTag::U32 => IrConst::U32(unsafe { v.u32 }),
        IrConstTag::U64 => IrConst::U64(unsafe { v.u64 }),
        IrConstTag::F32 => IrConst::F32(unsafe { v.f32 }),
        IrConstTag::F32i => IrConst::F32i(unsafe { v.f32i }),
        IrConstTag::F64 => IrConst::F64(unsafe { v.f64 }),
        IrConstTag::F64i => IrConst::F64i(unsafe { v.f64i }),
        IrConstTag::V128 => IrConst::V128(unsafe { v.v128 }),
        IrConstTag::V256 => IrConst::V256(unsafe { v.v256 }),
    })
}

/// Decodes a register array descriptor.
///
/// # Safety
///
/// Caller must ensure `ptr` is null or points to a producer descriptor
/// that stays valid for the call.
pub(crate) unsafe fn reg_array_from_raw(ptr: *const RawRegArray) -> Result<RegArray> {
    if ptr.is_null() {
        return Err(DecodeError::NullLink("register array"));
    }
    let raw = unsafe { &*ptr };
    Ok(RegArray {
        base: raw.base,
        elem_ty: IrType::from_code(raw.elem_ty)?,
        n_elems: raw.n_elems,
    })
}

/// Decodes a callee descriptor.
///
/// # Safety
///
/// Caller must ensure `ptr` is null or points to a producer callee whose
/// name buffer stays valid for `'a`.
pub(crate) unsafe fn callee_from_raw<'a>(ptr: *const RawCallee) -> Result<Callee<'a>> {
    if ptr.is_null() {
        return Err(DecodeError::NullLink("callee"));
    }
    let raw = unsafe { &*ptr };
    if raw.name.is_null() {
        return Err(DecodeError::NullLink("callee name"));
    }
    Ok(Callee {
        regparms: raw.regparms,
        name: unsafe { CStr::from_ptr(raw.name) },
        addr: raw.addr as usize,
        mcx_mask: raw.mcx_mask,
    })
}

/// Walks a null-terminated argument vector.
///
/// # Safety
///
/// Caller must ensure `args` is null or points to a null-terminated array
/// of expression links that stays valid for `'a`.
pub(crate) unsafe fn call_args<'a>(
    args: *const *const RawExpr,
    what: &'static str,
) -> Result<Vec<ExprRef<'a>>> {
    if args.is_null() {
        return Err(DecodeError::NullLink("argument vector"));
    }
    let mut out = Vec::new();
    for i in 0..MAX_CALL_ARGS {
        let entry = unsafe { *args.add(i) };
        if entry.is_null() {
            return Ok(out);
        }
        out.push(unsafe { ExprRef::new(entry, what)? });
    }
    Err(DecodeError::UnterminatedArgs(MAX_CALL_ARGS))
}

impl fmt::Display for ExprRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Ok(e) => e.fmt(f),
            Err(_) => f.write_str("<invalid>"),
        }
    }
}

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binder(id) => write!(f, "BIND-{id}"),
            Self::Get(g) => write!(f, "GET:{}({})", g.ty, g.offset),
            Self::GetI(g) => write!(f, "GETI{}[{},{}]", g.descr, g.ix, g.bias),
            Self::RdTmp(t) => t.fmt(f),
            Self::Qop(q) => {
                write!(
                    f,
                    "{}({},{},{},{})",
                    q.op, q.args[0], q.args[1], q.args[2], q.args[3]
                )
            }
            Self::Triop(t) => write!(f, "{}({},{},{})", t.op, t.args[0], t.args[1], t.args[2]),
            Self::Binop(b) => write!(f, "{}({},{})", b.op, b.arg1, b.arg2),
            Self::Unop(u) => write!(f, "{}({})", u.op, u.arg),
            Self::Load(l) => write!(f, "LD{}:{}({})", l.end.suffix(), l.ty, l.addr),
            Self::Const(c) => c.fmt(f),
            Self::CCall(c) => {
                write!(f, "{}(", c.callee)?;
                for (i, arg) in c.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    arg.fmt(f)?;
                }
                write!(f, "):{}", c.ret_ty)
            }
            Self::Ite(i) => write!(f, "ITE({},{},{})", i.cond, i.iftrue, i.iffalse),
            Self::VecRet => f.write_str("VECRET"),
            Self::GsPtr => f.write_str("GSPTR"),
        }
    }
}

impl fmt::Display for Callee<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.to_string_lossy())?;
        if self.regparms > 0 {
            write!(f, "[rp={}]", self.regparms)?;
        }
        if self.mcx_mask > 0 {
            write!(f, "[mcx={:#x}]", self.mcx_mask)?;
        }
        write!(f, "{{{:#x}}}", self.addr)
    }
}

#[cfg(test)]
mod tests {
    use vxr_ir::IrError;

    use super::*;
    use crate::raw::{RawBinop, RawConstValue, RawExprPayload};

    fn const_u32(value: u32) -> RawConst {
        RawConst {
            tag: IrConstTag::U32 as u32,
            value: RawConstValue { u32: value },
        }
    }

    #[test]
    fn test_decodes_constants() {
        let c = const_u32(0xdead_beef);
        let e = RawExpr {
            tag: IrExprTag::Const as u32,
            payload: RawExprPayload { con: &raw const c },
        };
        let r = unsafe { ExprRef::new(&raw const e, "expression") }.unwrap();
        assert_eq!(r.tag(), IrExprTag::Const);
        assert_eq!(r.as_const().unwrap(), IrConst::U32(0xdead_beef));
        assert_eq!(r.to_string(), "0xdeadbeef:I32");
    }

    #[test]
    fn test_checked_downcasts_report_both_tags() {
        let c = const_u32(7);
        let e = RawExpr {
            tag: IrExprTag::Const as u32,
            payload: RawExprPayload { con: &raw const c },
        };
        let r = unsafe { ExprRef::new(&raw const e, "expression") }.unwrap();
        let err = r.as_rd_tmp().unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TagMismatch { expected: "Iex_RdTmp", actual: "Iex_Const" }
        ));
    }

    #[test]
    fn test_renders_operation_trees() {
        let c = const_u32(4);
        let ce = RawExpr {
            tag: IrExprTag::Const as u32,
            payload: RawExprPayload { con: &raw const c },
        };
        let t1 = RawExpr {
            tag: IrExprTag::RdTmp as u32,
            payload: RawExprPayload { rd_tmp: 1 },
        };
        let add = RawExpr {
            tag: IrExprTag::Binop as u32,
            payload: RawExprPayload {
                binop: RawBinop {
                    op: IrOp::Iop_Add32 as u32,
                    arg1: &raw const t1,
                    arg2: &raw const ce,
                },
            },
        };
        let r = unsafe { ExprRef::new(&raw const add, "expression") }.unwrap();
        assert_eq!(r.to_string(), "Add32(t1,0x4:I32)");
        let b = r.as_binop().unwrap();
        assert_eq!(b.op, IrOp::Iop_Add32);
        assert_eq!(b.arg1.as_rd_tmp().unwrap(), IrTemp(1));
    }

    #[test]
    fn test_rejects_unknown_codes() {
        let e = RawExpr {
            tag: 0x18FF,
            payload: RawExprPayload { rd_tmp: 0 },
        };
        let err = unsafe { ExprRef::new(&raw const e, "expression") }.err().unwrap();
        assert!(matches!(
            err,
            DecodeError::UnknownEnumValue(IrError::UnknownEnum { what: "IRExprTag", code: 0x18FF })
        ));

        let t1 = RawExpr {
            tag: IrExprTag::RdTmp as u32,
            payload: RawExprPayload { rd_tmp: 1 },
        };
        let bad_op = RawExpr {
            tag: IrExprTag::Binop as u32,
            payload: RawExprPayload {
                binop: RawBinop {
                    op: 0x13FF,
                    arg1: &raw const t1,
                    arg2: &raw const t1,
                },
            },
        };
        let r = unsafe { ExprRef::new(&raw const bad_op, "expression") }.unwrap();
        assert!(matches!(r.decode(), Err(DecodeError::UnknownEnumValue(_))));
    }

    #[test]
    fn test_rejects_null_links() {
        let t1 = RawExpr {
            tag: IrExprTag::RdTmp as u32,
            payload: RawExprPayload { rd_tmp: 1 },
        };
        let half = RawExpr {
            tag: IrExprTag::Binop as u32,
            payload: RawExprPayload {
                binop: RawBinop {
                    op: IrOp::Iop_Add32 as u32,
                    arg1: &raw const t1,
                    arg2: std::ptr::null(),
                },
            },
        };
        let r = unsafe { ExprRef::new(&raw const half, "expression") }.unwrap();
        assert!(matches!(
            r.decode(),
            Err(DecodeError::NullLink("Binop argument"))
        ));
        assert!(matches!(
            unsafe { ExprRef::new(std::ptr::null(), "next") },
            Err(DecodeError::NullLink("next"))
        ));
    }

    #[test]
    fn test_marker_arguments_decode_bare() {
        let e = RawExpr {
            tag: IrExprTag::GsPtr as u32,
            payload: RawExprPayload { rd_tmp: 0 },
        };
        let r = unsafe { ExprRef::new(&raw const e, "expression") }.unwrap();
        assert!(matches!(r.decode().unwrap(), Expr::GsPtr));
        assert_eq!(r.to_string(), "GSPTR");
    }

    #[test]
    fn test_caps_runaway_argument_vectors() {
        let t1 = RawExpr {
            tag: IrExprTag::RdTmp as u32,
            payload: RawExprPayload { rd_tmp: 1 },
        };
        // A vector with no null terminator anywhere in the cap window.
        let entries = [&raw const t1 as *const RawExpr; MAX_CALL_ARGS];
        let walked = unsafe { call_args(entries.as_ptr(), "call argument") };
        assert!(matches!(
            walked,
            Err(DecodeError::UnterminatedArgs(MAX_CALL_ARGS))
        ));
    }
}
