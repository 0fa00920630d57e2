//! Statement views.
//!
//! Mirrors the expression layer: [`StmtRef`] is a tag-checked borrowed
//! handle, [`StmtRef::decode`] peels one level into a [`Stmt`], and the
//! `as_*` accessors are checked downcasts that refuse to reinterpret a
//! payload under the wrong tag.

use std::fmt;

use vxr_ir::{
    IrConst, IrEffect, IrEndness, IrJumpKind, IrLoadGOp, IrMBusEvent, IrStmtTag, IrTemp, RegArray,
};

use crate::expr::{call_args, callee_from_raw, const_from_raw, reg_array_from_raw};
use crate::raw::{N_FX_STATE, RawExpr, RawStmt};
use crate::{Callee, DecodeError, ExprRef, Result};

/// Borrowed, tag-checked handle to one statement node.
#[derive(Clone, Copy)]
pub struct StmtRef<'a> {
    raw: &'a RawStmt,
    tag: IrStmtTag,
}

/// One decoded statement.
#[derive(Clone)]
pub enum Stmt<'a> {
    NoOp,
    IMark(IMark),
    AbiHint(AbiHint<'a>),
    Put(Put<'a>),
    PutI(PutI<'a>),
    WrTmp(WrTmp<'a>),
    Store(Store<'a>),
    StoreG(StoreG<'a>),
    LoadG(LoadG<'a>),
    Cas(Cas<'a>),
    Llsc(Llsc<'a>),
    Dirty(Dirty<'a>),
    Mbe(IrMBusEvent),
    Exit(Exit<'a>),
}

/// Start of one guest instruction: address, encoded length, and the
/// delta subtracted from the address some guests report (Thumb).
#[derive(Clone, Copy)]
pub struct IMark {
    pub addr: u64,
    pub len: u32,
    pub delta: u8,
}

#[derive(Clone, Copy)]
pub struct AbiHint<'a> {
    pub base: ExprRef<'a>,
    pub len: i32,
    pub nia: ExprRef<'a>,
}

/// Write of a fixed guest-state offset.
#[derive(Clone, Copy)]
pub struct Put<'a> {
    pub offset: i32,
    pub data: ExprRef<'a>,
}

/// Write of a circular guest-state region at a runtime index.
#[derive(Clone, Copy)]
pub struct PutI<'a> {
    pub descr: RegArray,
    pub ix: ExprRef<'a>,
    pub bias: i32,
    pub data: ExprRef<'a>,
}

/// The only assignment form; each temporary is written exactly once.
#[derive(Clone, Copy)]
pub struct WrTmp<'a> {
    pub tmp: IrTemp,
    pub data: ExprRef<'a>,
}

/// Unconditional memory write.
#[derive(Clone, Copy)]
pub struct Store<'a> {
    pub end: IrEndness,
    pub addr: ExprRef<'a>,
    pub data: ExprRef<'a>,
}

/// Store that only happens when the guard evaluates to one.
#[derive(Clone, Copy)]
pub struct StoreG<'a> {
    pub end: IrEndness,
    pub addr: ExprRef<'a>,
    pub data: ExprRef<'a>,
    pub guard: ExprRef<'a>,
}

/// Load that widens through `cvt` when the guard evaluates to one and
/// falls back to `alt` otherwise.
#[derive(Clone, Copy)]
pub struct LoadG<'a> {
    pub end: IrEndness,
    pub cvt: IrLoadGOp,
    pub dst: IrTemp,
    pub addr: ExprRef<'a>,
    pub alt: ExprRef<'a>,
    pub guard: ExprRef<'a>,
}

/// Atomic compare-and-swap. The `hi` halves are present only for a
/// double-width exchange.
#[derive(Clone, Copy)]
pub struct Cas<'a> {
    pub old_hi: Option<IrTemp>,
    pub old_lo: IrTemp,
    pub end: IrEndness,
    pub addr: ExprRef<'a>,
    pub expd_hi: Option<ExprRef<'a>>,
    pub expd_lo: ExprRef<'a>,
    pub data_hi: Option<ExprRef<'a>>,
    pub data_lo: ExprRef<'a>,
}

/// Load-linked when `storedata` is absent, store-conditional otherwise.
/// A store-conditional writes its success bit to `result`.
#[derive(Clone, Copy)]
pub struct Llsc<'a> {
    pub end: IrEndness,
    pub result: IrTemp,
    pub addr: ExprRef<'a>,
    pub storedata: Option<ExprRef<'a>>,
}

/// Call to a helper with side effects, with its declared footprint.
#[derive(Clone)]
pub struct Dirty<'a> {
    pub callee: Callee<'a>,
    pub guard: ExprRef<'a>,
    pub args: Vec<ExprRef<'a>>,
    pub tmp: Option<IrTemp>,
    pub mem: Option<MemEffect<'a>>,
    pub fx_state: Vec<StateEffect>,
}

/// Memory region a dirty helper declares it touches.
#[derive(Clone, Copy)]
pub struct MemEffect<'a> {
    pub fx: IrEffect,
    pub addr: ExprRef<'a>,
    pub size: i32,
}

/// Guest-state region a dirty helper declares it touches.
#[derive(Clone, Copy)]
pub struct StateEffect {
    pub fx: IrEffect,
    pub offset: u16,
    pub size: u16,
    pub n_repeats: u8,
    pub repeat_len: u8,
}

/// Conditional side exit to a constant destination. Dynamic targets are
/// always the block's trailing next expression instead.
#[derive(Clone, Copy)]
pub struct Exit<'a> {
    pub guard: ExprRef<'a>,
    pub dst: IrConst,
    pub jk: IrJumpKind,
    pub offs_ip: i32,
}

impl<'a> StmtRef<'a> {
    /// Binds one statement node, validating the link and its tag.
    ///
    /// # Safety
    ///
    /// Caller must ensure `ptr` is null or points to a producer statement
    /// node that stays valid and unmodified for `'a`.
    pub(crate) unsafe fn new(ptr: *const RawStmt, what: &'static str) -> Result<Self> {
        if ptr.is_null() {
            return Err(DecodeError::NullLink(what));
        }
        let raw = unsafe { &*ptr };
        let tag = IrStmtTag::from_code(raw.tag)?;
        Ok(Self { raw, tag })
    }

    #[must_use]
    pub const fn tag(self) -> IrStmtTag {
        self.tag
    }

    /// Decodes this statement one level deep.
    pub fn decode(self) -> Result<Stmt<'a>> {
        Ok(match self.tag {
            IrStmtTag::NoOp => Stmt::NoOp,
            IrStmtTag::IMark => Stmt::IMark(self.read_imark()),
            IrStmtTag::AbiHint => Stmt::AbiHint(self.read_abi_hint()?),
            IrStmtTag::Put => Stmt::Put(self.read_put()?),
            IrStmtTag::PutI => Stmt::PutI(self.read_put_i()?),
            IrStmtTag::WrTmp => Stmt::WrTmp(self.read_wr_tmp()?),
            IrStmtTag::Store => Stmt::Store(self.read_store()?),
            IrStmtTag::StoreG => Stmt::StoreG(self.read_store_g()?),
            IrStmtTag::LoadG => Stmt::LoadG(self.read_load_g()?),
            IrStmtTag::Cas => Stmt::Cas(self.read_cas()?),
            IrStmtTag::Llsc => Stmt::Llsc(self.read_llsc()?),
            IrStmtTag::Dirty => Stmt::Dirty(self.read_dirty()?),
            IrStmtTag::Mbe => Stmt::Mbe(self.read_mbe()?),
            IrStmtTag::Exit => Stmt::Exit(self.read_exit()?),
        })
    }

    pub fn as_imark(self) -> Result<IMark> {
        self.expect(IrStmtTag::IMark)?;
        Ok(self.read_imark())
    }

    pub fn as_abi_hint(self) -> Result<AbiHint<'a>> {
        self.expect(IrStmtTag::AbiHint)?;
        self.read_abi_hint()
    }

    pub fn as_put(self) -> Result<Put<'a>> {
        self.expect(IrStmtTag::Put)?;
        self.read_put()
    }

    pub fn as_put_i(self) -> Result<PutI<'a>> {
        self.expect(IrStmtTag::PutI)?;
        self.read_put_i()
    }

    pub fn as_wr_tmp(self) -> Result<WrTmp<'a>> {
        self.expect(IrStmtTag::WrTmp)?;
        self.read_wr_tmp()
    }

    pub fn as_store(self) -> Result<Store<'a>> {
        self.expect(IrStmtTag::Store)?;
        self.read_store()
    }

    pub fn as_store_g(self) -> Result<StoreG<'a>> {
        self.expect(IrStmtTag::StoreG)?;
        self.read_store_g()
    }

    pub fn as_load_g(self) -> Result<LoadG<'a>> {
        self.expect(IrStmtTag::LoadG)?;
        self.read_load_g()
    }

    pub fn as_cas(self) -> Result<Cas<'a>> {
        self.expect(IrStmtTag::Cas)?;
        self.read_cas()
    }

    pub fn as_llsc(self) -> Result<Llsc<'a>> {
        self.expect(IrStmtTag::Llsc)?;
        self.read_llsc()
    }

    pub fn as_dirty(self) -> Result<Dirty<'a>> {
        self.expect(IrStmtTag::Dirty)?;
        self.read_dirty()
    }

    pub fn as_mbe(self) -> Result<IrMBusEvent> {
        self.expect(IrStmtTag::Mbe)?;
        self.read_mbe()
    }

    pub fn as_exit(self) -> Result<Exit<'a>> {
        self.expect(IrStmtTag::Exit)?;
        self.read_exit()
    }

    fn expect(self, want: IrStmtTag) -> Result<()> {
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
        unsafe { ExprRef::new(ptr, what) }
    }

    fn opt_child(self, ptr: *const RawExpr, what: &'static str) -> Result<Option<ExprRef<'a>>> {
        if ptr.is_null() {
            Ok(None)
        } else {
            self.child(ptr, what).map(Some)
        }
    }

    // The readers below interpret the payload union. Each is only reached
    // after the tag check in `new` or `expect` selected its variant.

    fn read_imark(self) -> IMark {
        let m = unsafe { self.raw.payload.imark };
        IMark {
            addr: m.addr,
            len: m.len,
            delta: m.delta,
        }
    }

    fn read_abi_hint(self) -> Result<AbiHint<'a>> {
        let h = unsafe { self.raw.payload.abi_hint };
        Ok(AbiHint {
            base: self.child(h.base, "AbiHint base")?,
            len: h.len,
            nia: self.child(h.nia, "AbiHint nia")?,
        })
    }

    fn read_put(self) -> Result<Put<'a>> {
        let p = unsafe { self.raw.payload.put };
        Ok(Put {
            offset: p.offset,
            data: self.child(p.data, "Put data")?,
        })
    }

    fn read_put_i(self) -> Result<PutI<'a>> {
        let ptr = unsafe { self.raw.payload.put_i };
        if ptr.is_null() {
            return Err(DecodeError::NullLink("PutI details"));
        }
        let p = unsafe { *ptr };
        Ok(PutI {
            descr: unsafe { reg_array_from_raw(p.descr)? },
            ix: self.child(p.ix, "PutI index")?,
            bias: p.bias,
            data: self.child(p.data, "PutI data")?,
        })
    }

    fn read_wr_tmp(self) -> Result<WrTmp<'a>> {
        let w = unsafe { self.raw.payload.wr_tmp };
        Ok(WrTmp {
            tmp: IrTemp(w.tmp),
            data: self.child(w.data, "WrTmp data")?,
        })
    }

    fn read_store(self) -> Result<Store<'a>> {
        let s = unsafe { self.raw.payload.store };
        Ok(Store {
            end: IrEndness::from_code(s.end)?,
            addr: self.child(s.addr, "Store address")?,
            data: self.child(s.data, "Store data")?,
        })
    }

    fn read_store_g(self) -> Result<StoreG<'a>> {
        let ptr = unsafe { self.raw.payload.store_g };
        if ptr.is_null() {
            return Err(DecodeError::NullLink("StoreG details"));
        }
        let s = unsafe { *ptr };
        Ok(StoreG {
            end: IrEndness::from_code(s.end)?,
            addr: self.child(s.addr, "StoreG address")?,
            data: self.child(s.data, "StoreG data")?,
            guard: self.child(s.guard, "StoreG guard")?,
        })
    }

    fn read_load_g(self) -> Result<LoadG<'a>> {
        let ptr = unsafe { self.raw.payload.load_g };
        if ptr.is_null() {
            return Err(DecodeError::NullLink("LoadG details"));
        }
        let l = unsafe { *ptr };
        Ok(LoadG {
            end: IrEndness::from_code(l.end)?,
            cvt: IrLoadGOp::from_code(l.cvt)?,
            dst: IrTemp(l.dst),
            addr: self.child(l.addr, "LoadG address")?,
            alt: self.child(l.alt, "LoadG alt")?,
            guard: self.child(l.guard, "LoadG guard")?,
        })
    }

    fn read_cas(self) -> Result<Cas<'a>> {
        let ptr = unsafe { self.raw.payload.cas };
        if ptr.is_null() {
            return Err(DecodeError::NullLink("CAS details"));
        }
        let c = unsafe { *ptr };
        Ok(Cas {
            old_hi: IrTemp::from_raw(c.old_hi),
            old_lo: IrTemp(c.old_lo),
            end: IrEndness::from_code(c.end)?,
            addr: self.child(c.addr, "CAS address")?,
            expd_hi: self.opt_child(c.expd_hi, "CAS expected")?,
            expd_lo: self.child(c.expd_lo, "CAS expected")?,
            data_hi: self.opt_child(c.data_hi, "CAS data")?,
            data_lo: self.child(c.data_lo, "CAS data")?,
        })
    }

    fn read_llsc(self) -> Result<Llsc<'a>> {
        let l = unsafe { self.raw.payload.llsc };
        Ok(Llsc {
            end: IrEndness::from_code(l.end)?,
            result: IrTemp(l.result),
            addr: self.child(l.addr, "LLSC address")?,
            storedata: self.opt_child(l.storedata, "LLSC store data")?,
        })
    }

    fn read_dirty(self) -> Result<Dirty<'a>> {
        let ptr = unsafe { self.raw.payload.dirty };
        if ptr.is_null() {
            return Err(DecodeError::NullLink("Dirty details"));
        }
        let d = unsafe { &*ptr };
        let m_fx = IrEffect::from_code(d.m_fx)?;
        let mem = if m_fx == IrEffect::None {
            None
        } else {
            Some(MemEffect {
                fx: m_fx,
                addr: self.child(d.m_addr, "Dirty mem address")?,
                size: d.m_size,
            })
        };
        if d.n_fx_state < 0 || d.n_fx_state as usize > N_FX_STATE {
            return Err(DecodeError::BadCounts {
                what: "fxState",
                used: d.n_fx_state,
                size: N_FX_STATE as i32,
            });
        }
        let mut fx_state = Vec::with_capacity(d.n_fx_state as usize);
        for s in &d.fx_state[..d.n_fx_state as usize] {
            fx_state.push(StateEffect {
                fx: IrEffect::from_code(u32::from(s.fx))?,
                offset: s.offset,
                size: s.size,
                n_repeats: s.n_repeats,
                repeat_len: s.repeat_len,
            });
        }
        Ok(Dirty {
            callee: unsafe { callee_from_raw(d.cee)? },
            guard: self.child(d.guard, "Dirty guard")?,
            args: unsafe { call_args(d.args, "call argument")? },
            tmp: IrTemp::from_raw(d.tmp),
            mem,
            fx_state,
        })
    }

    fn read_mbe(self) -> Result<IrMBusEvent> {
        IrMBusEvent::from_code(unsafe { self.raw.payload.mbe }).map_err(DecodeError::from)
    }

    fn read_exit(self) -> Result<Exit<'a>> {
        let e = unsafe { self.raw.payload.exit };
        Ok(Exit {
            guard: self.child(e.guard, "Exit guard")?,
            dst: unsafe { const_from_raw(e.dst, "Exit destination")? },
            jk: IrJumpKind::from_code(e.jk)?,
            offs_ip: e.offs_ip,
        })
    }
}

impl fmt::Display for StmtRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Ok(s) => s.fmt(f),
            Err(_) => f.write_str("<invalid>"),
        }
    }
}

impl fmt::Display for Stmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => f.write_str("IR-NoOp"),
            Self::IMark(m) => {
                write!(f, "------ IMark({:#x}, {}, {}) ------", m.addr, m.len, m.delta)
            }
            Self::AbiHint(h) => write!(f, "====== AbiHint({}, {}, {}) ======", h.base, h.len, h.nia),
            Self::Put(p) => write!(f, "PUT({}) = {}", p.offset, p.data),
            Self::PutI(p) => write!(f, "PUTI{}[{},{}] = {}", p.descr, p.ix, p.bias, p.data),
            Self::WrTmp(w) => write!(f, "{} = {}", w.tmp, w.data),
            Self::Store(s) => write!(f, "ST{}({}) = {}", s.end.suffix(), s.addr, s.data),
            Self::StoreG(s) => write!(
                f,
                "if ({}) {{ ST{}({}) = {} }}",
                s.guard,
                s.end.suffix(),
                s.addr,
                s.data
            ),
            Self::LoadG(l) => write!(
                f,
                "{} = if ({}) {}(LD{}({})) else {}",
                l.dst,
                l.guard,
                l.cvt,
                l.end.suffix(),
                l.addr,
                l.alt
            ),
            Self::Cas(c) => {
                if let Some(hi) = c.old_hi {
                    write!(f, "{hi},")?;
                }
                write!(f, "{} = CAS{}({}::", c.old_lo, c.end.suffix(), c.addr)?;
                if let Some(e) = &c.expd_hi {
                    write!(f, "{e},")?;
                }
                write!(f, "{}->", c.expd_lo)?;
                if let Some(d) = &c.data_hi {
                    write!(f, "{d},")?;
                }
                write!(f, "{})", c.data_lo)
            }
            Self::Llsc(l) => match &l.storedata {
                None => write!(f, "{} = LD{}-Linked({})", l.result, l.end.suffix(), l.addr),
                Some(sd) => write!(
                    f,
                    "{} = ( ST{}-Cond({}) = {} )",
                    l.result,
                    l.end.suffix(),
                    l.addr,
                    sd
                ),
            },
            Self::Dirty(d) => {
                if let Some(t) = d.tmp {
                    write!(f, "{t} = ")?;
                }
                write!(f, "DIRTY {}", d.guard)?;
                if let Some(m) = &d.mem {
                    write!(f, " {}-mem({},{})", m.fx, m.addr, m.size)?;
                }
                for s in &d.fx_state {
                    write!(f, " {}-gst({},{}", s.fx, s.offset, s.size)?;
                    if s.n_repeats > 0 {
                        write!(f, ",reps{},step{}", s.n_repeats, s.repeat_len)?;
                    }
                    f.write_str(")")?;
                }
                write!(f, " ::: {}(", d.callee)?;
                for (i, arg) in d.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    arg.fmt(f)?;
                }
                f.write_str(")")
            }
            Self::Mbe(event) => write!(f, "IR-{event}"),
            Self::Exit(e) => write!(
                f,
                "if ({}) {{ PUT({}) = {}; exit-{} }}",
                e.guard, e.offs_ip, e.dst, e.jk
            ),
        }
    }
}
