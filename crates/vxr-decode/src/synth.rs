//! In-memory producer stand-in.
//!
//! [`BlockSynth`] assembles superblocks with the producer's exact memory
//! layout, so decode paths can be exercised without loading a lifter
//! library. Construction only; reading the sealed result goes through
//! [`Block::from_raw`] like any real lift result. Node handles returned
//! by the expression builders stay valid because every node lives in its
//! own heap allocation owned by the arena.

use std::ffi::CString;
use std::ptr;

use vxr_ir::{IrConst, IrEffect, IrEndness, IrExprTag, IrJumpKind, IrLoadGOp, IrOp, IrStmtTag,
    IrTemp, IrType};

use crate::raw::{
    N_FX_STATE, RawAbiHint, RawBinop, RawCCall, RawCallee, RawCas, RawConst, RawConstValue,
    RawDirty, RawExit, RawExpr, RawExprPayload, RawFxState, RawGet, RawGetI, RawIMark, RawIte,
    RawLlsc, RawLoad, RawLoadG, RawPut, RawPutI, RawQop, RawRegArray, RawSb, RawStmt,
    RawStmtPayload, RawStore, RawStoreG, RawTriop, RawTypeEnv, RawUnop, RawWrTmp,
};
use crate::{Block, Result, StateEffect};

/// Handle to an expression node inside one [`BlockSynth`] arena.
#[derive(Clone, Copy)]
pub struct SynthExpr(*const RawExpr);

/// Compare-and-swap operands. The `hi` halves select a double-width
/// exchange and must be set together.
pub struct CasSpec {
    pub old_hi: Option<IrTemp>,
    pub old_lo: IrTemp,
    pub end: IrEndness,
    pub addr: SynthExpr,
    pub expd_hi: Option<SynthExpr>,
    pub expd_lo: SynthExpr,
    pub data_hi: Option<SynthExpr>,
    pub data_lo: SynthExpr,
}

/// Dirty-call shape: callee, result slot, and declared effects.
/// At most [`N_FX_STATE`] `state` entries fit the producer layout.
pub struct DirtySpec<'s> {
    pub name: &'s str,
    pub regparms: i32,
    pub tmp: Option<IrTemp>,
    pub args: &'s [SynthExpr],
    pub mem: Option<(IrEffect, SynthExpr, i32)>,
    pub state: &'s [StateEffect],
}

#[allow(dead_code)] // variants pin arena nodes that are read through raw pointers only
enum Node {
    Expr(Box<RawExpr>),
    Const(Box<RawConst>),
    RegArray(Box<RawRegArray>),
    Callee(Box<RawCallee>),
    Qop(Box<RawQop>),
    Triop(Box<RawTriop>),
    PutI(Box<RawPutI>),
    StoreG(Box<RawStoreG>),
    LoadG(Box<RawLoadG>),
    Cas(Box<RawCas>),
    Dirty(Box<RawDirty>),
    Stmt(Box<RawStmt>),
    Args(Box<[*const RawExpr]>),
}

/// Growable superblock under construction.
pub struct BlockSynth {
    nodes: Vec<Node>,
    names: Vec<CString>,
    types: Vec<u32>,
    stmts: Vec<*const RawStmt>,
    next: Option<*const RawExpr>,
    jumpkind: u32,
    offs_ip: i32,
}

/// Sealed superblock. Owns every node the arena allocated; the root
/// pointer from [`SynthBlock::as_raw`] is valid for as long as this
/// value lives.
#[allow(dead_code)] // fields other than `sb` are reached through raw pointers only
pub struct SynthBlock {
    nodes: Vec<Node>,
    names: Vec<CString>,
    types: Box<[u32]>,
    stmt_table: Box<[*const RawStmt]>,
    tyenv: Box<RawTypeEnv>,
    sb: Box<RawSb>,
}

impl BlockSynth {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            names: Vec::new(),
            types: Vec::new(),
            stmts: Vec::new(),
            next: None,
            jumpkind: IrJumpKind::Boring as u32,
            offs_ip: 0,
        }
    }

    /// Declares a fresh temporary of the given type.
    pub fn temp(&mut self, ty: IrType) -> IrTemp {
        let index = self.types.len() as u32;
        self.types.push(ty as u32);
        IrTemp(index)
    }

    pub fn rd_tmp(&mut self, tmp: IrTemp) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::RdTmp as u32,
            payload: RawExprPayload { rd_tmp: tmp.0 },
        })
    }

    pub fn constant(&mut self, value: IrConst) -> SynthExpr {
        let con = self.push_const(value);
        self.push_expr(RawExpr {
            tag: IrExprTag::Const as u32,
            payload: RawExprPayload { con },
        })
    }

    pub fn get(&mut self, offset: i32, ty: IrType) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::Get as u32,
            payload: RawExprPayload {
                get: RawGet { offset, ty: ty as u32 },
            },
        })
    }

    pub fn get_i(
        &mut self,
        base: i32,
        elem_ty: IrType,
        n_elems: i32,
        ix: SynthExpr,
        bias: i32,
    ) -> SynthExpr {
        let descr = self.push_reg_array(base, elem_ty, n_elems);
        self.push_expr(RawExpr {
            tag: IrExprTag::GetI as u32,
            payload: RawExprPayload {
                get_i: RawGetI { descr, ix: ix.0, bias },
            },
        })
    }

    pub fn unop(&mut self, op: IrOp, arg: SynthExpr) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::Unop as u32,
            payload: RawExprPayload {
                unop: RawUnop { op: op as u32, arg: arg.0 },
            },
        })
    }

    pub fn binop(&mut self, op: IrOp, arg1: SynthExpr, arg2: SynthExpr) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::Binop as u32,
            payload: RawExprPayload {
                binop: RawBinop { op: op as u32, arg1: arg1.0, arg2: arg2.0 },
            },
        })
    }

    pub fn triop(
        &mut self,
        op: IrOp,
        arg1: SynthExpr,
        arg2: SynthExpr,
        arg3: SynthExpr,
    ) -> SynthExpr {
        let details = Box::new(RawTriop {
            op: op as u32,
            arg1: arg1.0,
            arg2: arg2.0,
            arg3: arg3.0,
        });
        let triop = &raw const *details;
        self.nodes.push(Node::Triop(details));
        self.push_expr(RawExpr {
            tag: IrExprTag::Triop as u32,
            payload: RawExprPayload { triop },
        })
    }

    pub fn qop(
        &mut self,
        op: IrOp,
        arg1: SynthExpr,
        arg2: SynthExpr,
        arg3: SynthExpr,
        arg4: SynthExpr,
    ) -> SynthExpr {
        let details = Box::new(RawQop {
            op: op as u32,
            arg1: arg1.0,
            arg2: arg2.0,
            arg3: arg3.0,
            arg4: arg4.0,
        });
        let qop = &raw const *details;
        self.nodes.push(Node::Qop(details));
        self.push_expr(RawExpr {
            tag: IrExprTag::Qop as u32,
            payload: RawExprPayload { qop },
        })
    }

    pub fn load(&mut self, end: IrEndness, ty: IrType, addr: SynthExpr) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::Load as u32,
            payload: RawExprPayload {
                load: RawLoad { end: end as u32, ty: ty as u32, addr: addr.0 },
            },
        })
    }

    pub fn ite(&mut self, cond: SynthExpr, iftrue: SynthExpr, iffalse: SynthExpr) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::Ite as u32,
            payload: RawExprPayload {
                ite: RawIte { cond: cond.0, iftrue: iftrue.0, iffalse: iffalse.0 },
            },
        })
    }

    pub fn ccall(
        &mut self,
        name: &str,
        regparms: i32,
        ret_ty: IrType,
        args: &[SynthExpr],
    ) -> SynthExpr {
        let cee = self.push_callee(name, regparms);
        let argv = self.push_args(args);
        self.push_expr(RawExpr {
            tag: IrExprTag::CCall as u32,
            payload: RawExprPayload {
                ccall: RawCCall { cee, ret_ty: ret_ty as u32, args: argv },
            },
        })
    }

    pub fn vecret(&mut self) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::VecRet as u32,
            payload: RawExprPayload { rd_tmp: 0 },
        })
    }

    pub fn gsptr(&mut self) -> SynthExpr {
        self.push_expr(RawExpr {
            tag: IrExprTag::GsPtr as u32,
            payload: RawExprPayload { rd_tmp: 0 },
        })
    }

    /// Expression node with an arbitrary tag code over a zeroed payload,
    /// for malformed input.
    pub fn raw_expr_tag(&mut self, tag: u32) -> SynthExpr {
        self.push_expr(RawExpr {
            tag,
            payload: unsafe { std::mem::zeroed() },
        })
    }

    pub fn no_op(&mut self) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::NoOp as u32,
            payload: RawStmtPayload { mbe: 0 },
        });
    }

    pub fn imark(&mut self, addr: u64, len: u32, delta: u8) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::IMark as u32,
            payload: RawStmtPayload {
                imark: RawIMark { addr, len, delta },
            },
        });
    }

    pub fn abi_hint(&mut self, base: SynthExpr, len: i32, nia: SynthExpr) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::AbiHint as u32,
            payload: RawStmtPayload {
                abi_hint: RawAbiHint { base: base.0, len, nia: nia.0 },
            },
        });
    }

    pub fn put(&mut self, offset: i32, data: SynthExpr) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::Put as u32,
            payload: RawStmtPayload {
                put: RawPut { offset, data: data.0 },
            },
        });
    }

    pub fn put_i(
        &mut self,
        base: i32,
        elem_ty: IrType,
        n_elems: i32,
        ix: SynthExpr,
        bias: i32,
        data: SynthExpr,
    ) {
        let descr = self.push_reg_array(base, elem_ty, n_elems);
        let details = Box::new(RawPutI {
            descr,
            ix: ix.0,
            bias,
            data: data.0,
        });
        let put_i = &raw const *details;
        self.nodes.push(Node::PutI(details));
        self.push_stmt(RawStmt {
            tag: IrStmtTag::PutI as u32,
            payload: RawStmtPayload { put_i },
        });
    }

    pub fn wr_tmp(&mut self, tmp: IrTemp, data: SynthExpr) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::WrTmp as u32,
            payload: RawStmtPayload {
                wr_tmp: RawWrTmp { tmp: tmp.0, data: data.0 },
            },
        });
    }

    pub fn store(&mut self, end: IrEndness, addr: SynthExpr, data: SynthExpr) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::Store as u32,
            payload: RawStmtPayload {
                store: RawStore { end: end as u32, addr: addr.0, data: data.0 },
            },
        });
    }

    pub fn store_g(&mut self, end: IrEndness, addr: SynthExpr, data: SynthExpr, guard: SynthExpr) {
        let details = Box::new(RawStoreG {
            end: end as u32,
            addr: addr.0,
            data: data.0,
            guard: guard.0,
        });
        let store_g = &raw const *details;
        self.nodes.push(Node::StoreG(details));
        self.push_stmt(RawStmt {
            tag: IrStmtTag::StoreG as u32,
            payload: RawStmtPayload { store_g },
        });
    }

    pub fn load_g(
        &mut self,
        end: IrEndness,
        cvt: IrLoadGOp,
        dst: IrTemp,
        addr: SynthExpr,
        alt: SynthExpr,
        guard: SynthExpr,
    ) {
        let details = Box::new(RawLoadG {
            end: end as u32,
            cvt: cvt as u32,
            dst: dst.0,
            addr: addr.0,
            alt: alt.0,
            guard: guard.0,
        });
        let load_g = &raw const *details;
        self.nodes.push(Node::LoadG(details));
        self.push_stmt(RawStmt {
            tag: IrStmtTag::LoadG as u32,
            payload: RawStmtPayload { load_g },
        });
    }

    pub fn cas(&mut self, spec: &CasSpec) {
        let details = Box::new(RawCas {
            old_hi: spec.old_hi.map_or(IrTemp::INVALID_CODE, |t| t.0),
            old_lo: spec.old_lo.0,
            end: spec.end as u32,
            addr: spec.addr.0,
            expd_hi: spec.expd_hi.map_or(ptr::null(), |e| e.0),
            expd_lo: spec.expd_lo.0,
            data_hi: spec.data_hi.map_or(ptr::null(), |e| e.0),
            data_lo: spec.data_lo.0,
        });
        let cas = &raw const *details;
        self.nodes.push(Node::Cas(details));
        self.push_stmt(RawStmt {
            tag: IrStmtTag::Cas as u32,
            payload: RawStmtPayload { cas },
        });
    }

    pub fn llsc(
        &mut self,
        end: IrEndness,
        result: IrTemp,
        addr: SynthExpr,
        storedata: Option<SynthExpr>,
    ) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::Llsc as u32,
            payload: RawStmtPayload {
                llsc: RawLlsc {
                    end: end as u32,
                    result: result.0,
                    addr: addr.0,
                    storedata: storedata.map_or(ptr::null(), |e| e.0),
                },
            },
        });
    }

    pub fn dirty(&mut self, guard: SynthExpr, spec: &DirtySpec<'_>) {
        let cee = self.push_callee(spec.name, spec.regparms);
        let args = self.push_args(spec.args);
        let mut fx_state =
            [RawFxState { fx: 0, offset: 0, size: 0, n_repeats: 0, repeat_len: 0 }; N_FX_STATE];
        for (slot, s) in fx_state.iter_mut().zip(spec.state) {
            *slot = RawFxState {
                fx: s.fx as u16,
                offset: s.offset,
                size: s.size,
                n_repeats: s.n_repeats,
                repeat_len: s.repeat_len,
            };
        }
        let (m_fx, m_addr, m_size) = match spec.mem {
            Some((fx, addr, size)) => (fx as u32, addr.0, size),
            None => (IrEffect::None as u32, ptr::null(), 0),
        };
        let details = Box::new(RawDirty {
            cee,
            guard: guard.0,
            args,
            tmp: spec.tmp.map_or(IrTemp::INVALID_CODE, |t| t.0),
            m_fx,
            m_addr,
            m_size,
            n_fx_state: spec.state.len() as i32,
            fx_state,
        });
        let dirty = &raw const *details;
        self.nodes.push(Node::Dirty(details));
        self.push_stmt(RawStmt {
            tag: IrStmtTag::Dirty as u32,
            payload: RawStmtPayload { dirty },
        });
    }

    pub fn mbe(&mut self, event: vxr_ir::IrMBusEvent) {
        self.push_stmt(RawStmt {
            tag: IrStmtTag::Mbe as u32,
            payload: RawStmtPayload { mbe: event as u32 },
        });
    }

    pub fn exit(&mut self, guard: SynthExpr, dst: IrConst, jk: IrJumpKind, offs_ip: i32) {
        let dst = self.push_const(dst);
        self.push_stmt(RawStmt {
            tag: IrStmtTag::Exit as u32,
            payload: RawStmtPayload {
                exit: RawExit { guard: guard.0, dst, jk: jk as u32, offs_ip },
            },
        });
    }

    /// Statement node with an arbitrary tag code over a zeroed payload,
    /// for malformed input. A valid tag over the zeroed payload reads
    /// its detail pointer as null.
    pub fn raw_stmt_tag(&mut self, tag: u32) {
        // All payload members are plain integers or pointers, so the
        // all-zero bit pattern is valid for every one of them.
        self.push_stmt(RawStmt {
            tag,
            payload: unsafe { std::mem::zeroed() },
        });
    }

    pub fn set_next(&mut self, next: SynthExpr) {
        self.next = Some(next.0);
    }

    pub fn set_jumpkind(&mut self, jk: IrJumpKind) {
        self.jumpkind = jk as u32;
    }

    pub fn set_offs_ip(&mut self, offs_ip: i32) {
        self.offs_ip = offs_ip;
    }

    /// Freezes the arena into producer-shaped memory.
    ///
    /// Without an explicit next expression the block falls through to
    /// address zero. The statement table is over-allocated so the used
    /// count sits below capacity, matching what the producer's growable
    /// arrays look like in practice.
    #[must_use]
    pub fn seal(self) -> SynthBlock {
        let mut nodes = self.nodes;
        let types = self.types.into_boxed_slice();
        let used = self.stmts.len();
        let mut table = self.stmts;
        table.resize(used + 4, ptr::null());
        let stmt_table = table.into_boxed_slice();

        let next = match self.next {
            Some(p) => p,
            None => {
                let con = Box::new(RawConst {
                    tag: vxr_ir::IrConstTag::U64 as u32,
                    value: RawConstValue { u64: 0 },
                });
                let con_ptr = &raw const *con;
                nodes.push(Node::Const(con));
                let expr = Box::new(RawExpr {
                    tag: IrExprTag::Const as u32,
                    payload: RawExprPayload { con: con_ptr },
                });
                let expr_ptr = &raw const *expr;
                nodes.push(Node::Expr(expr));
                expr_ptr
            }
        };

        let tyenv = Box::new(RawTypeEnv {
            types: if types.is_empty() { ptr::null() } else { types.as_ptr() },
            types_size: types.len() as i32,
            types_used: types.len() as i32,
        });

        let sb = Box::new(RawSb {
            tyenv: &raw const *tyenv,
            stmts: if stmt_table.is_empty() { ptr::null() } else { stmt_table.as_ptr() },
            stmts_size: stmt_table.len() as i32,
            stmts_used: used as i32,
            next,
            jumpkind: self.jumpkind,
            offs_ip: self.offs_ip,
        });

        SynthBlock {
            nodes,
            names: self.names,
            types,
            stmt_table,
            tyenv,
            sb,
        }
    }

    fn push_expr(&mut self, node: RawExpr) -> SynthExpr {
        let boxed = Box::new(node);
        let p = &raw const *boxed;
        self.nodes.push(Node::Expr(boxed));
        SynthExpr(p)
    }

    fn push_const(&mut self, value: IrConst) -> *const RawConst {
        let raw_value = match value {
            IrConst::U1(b) => RawConstValue { u1: u8::from(b) },
            IrConst::U8(v) => RawConstValue { u8: v },
            IrConst::U16(v) => RawConstValue { u16: v },
            IrConst::U32(v) => RawConstValue { u32: v },
            IrConst::U64(v) => RawConstValue { u64: v },
            IrConst::F32(v) => RawConstValue { f32: v },
            IrConst::F32i(v) => RawConstValue { f32i: v },
            IrConst::F64(v) => RawConstValue { f64: v },
            IrConst::F64i(v) => RawConstValue { f64i: v },
            IrConst::V128(v) => RawConstValue { v128: v },
            IrConst::V256(v) => RawConstValue { v256: v },
        };
        let boxed = Box::new(RawConst {
            tag: value.tag() as u32,
            value: raw_value,
        });
        let p = &raw const *boxed;
        self.nodes.push(Node::Const(boxed));
        p
    }

    fn push_reg_array(&mut self, base: i32, elem_ty: IrType, n_elems: i32) -> *const RawRegArray {
        let boxed = Box::new(RawRegArray {
            base,
            elem_ty: elem_ty as u32,
            n_elems,
        });
        let p = &raw const *boxed;
        self.nodes.push(Node::RegArray(boxed));
        p
    }

    fn push_callee(&mut self, name: &str, regparms: i32) -> *const RawCallee {
        // Helper names never contain interior NULs; map one to an empty
        // name rather than failing the builder.
        let cname = CString::new(name).unwrap_or_default();
        let name_ptr = cname.as_ptr();
        self.names.push(cname);
        let boxed = Box::new(RawCallee {
            regparms,
            name: name_ptr,
            addr: ptr::null(),
            mcx_mask: 0,
        });
        let p = &raw const *boxed;
        self.nodes.push(Node::Callee(boxed));
        p
    }

    fn push_args(&mut self, args: &[SynthExpr]) -> *const *const RawExpr {
        let mut v: Vec<*const RawExpr> = args.iter().map(|a| a.0).collect();
        v.push(ptr::null());
        let boxed = v.into_boxed_slice();
        let p = boxed.as_ptr();
        self.nodes.push(Node::Args(boxed));
        p
    }

    fn push_stmt(&mut self, node: RawStmt) {
        let boxed = Box::new(node);
        let p = &raw const *boxed;
        self.nodes.push(Node::Stmt(boxed));
        self.stmts.push(p);
    }
}

impl Default for BlockSynth {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthBlock {
    /// The pointer a lift call would have returned.
    #[must_use]
    pub fn as_raw(&self) -> *const RawSb {
        &raw const *self.sb
    }

    /// Binds the sealed block exactly as a real lift result would be.
    pub fn block(&self) -> Result<Block<'_>> {
        // The arena owns every node `sb` links to for as long as `self`
        // lives, which bounds the returned view's lifetime.
        unsafe { Block::from_raw(self.as_raw()) }
    }
}

#[cfg(test)]
mod tests {
    use vxr_ir::{IrError, IrMBusEvent};

    use super::*;
    use crate::{DecodeError, Expr, Stmt};

    #[test]
    fn test_empty_block_binds() {
        let synth = BlockSynth::new();
        let sealed = synth.seal();
        let block = sealed.block().unwrap();
        assert_eq!(block.stmt_count(), 0);
        assert_eq!(block.temp_count(), 0);
        assert!(block.stmt(0).is_none());
        assert_eq!(block.jumpkind(), IrJumpKind::Boring);
        assert_eq!(block.next().as_const().unwrap().as_addr(), Some(0));
    }

    #[test]
    fn test_register_move_block_decodes() {
        // The shape a lifter emits for a 4-byte ARM64 register move at
        // 0x1000: read x0, write x2, fall through to 0x1004.
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        synth.imark(0x1000, 4, 0);
        let x0 = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, x0);
        let data = synth.rd_tmp(t0);
        synth.put(32, data);
        let next = synth.constant(IrConst::U64(0x1004));
        synth.set_next(next);
        synth.set_jumpkind(IrJumpKind::Boring);
        synth.set_offs_ip(272);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(block.stmt_count(), 3);
        let m = block.stmt(0).unwrap().as_imark().unwrap();
        assert_eq!((m.addr, m.len, m.delta), (0x1000, 4, 0));

        let w = block.stmt(1).unwrap().as_wr_tmp().unwrap();
        assert_eq!(w.tmp, t0);
        let g = w.data.as_get().unwrap();
        assert_eq!((g.offset, g.ty), (16, IrType::I64));
        assert_eq!(block.temp_type(w.tmp), Some(IrType::I64));

        let p = block.stmt(2).unwrap().as_put().unwrap();
        assert_eq!(p.offset, 32);
        assert_eq!(p.data.as_rd_tmp().unwrap(), t0);

        assert!(block.stmt(3).is_none());
        assert_eq!(block.next().as_const().unwrap().as_addr(), Some(0x1004));
        assert_eq!(block.jumpkind(), IrJumpKind::Boring);
        assert_eq!(block.offs_ip(), 272);
    }

    #[test]
    fn test_rebinding_is_deterministic() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I32);
        synth.imark(0x2000, 4, 0);
        let lhs = synth.rd_tmp(t0);
        let four = synth.constant(IrConst::U32(4));
        let sum = synth.binop(IrOp::Iop_Add32, lhs, four);
        synth.put(8, sum);
        let sealed = synth.seal();

        let first = sealed.block().unwrap();
        let second = sealed.block().unwrap();
        assert_eq!(first.stmt_count(), second.stmt_count());
        assert_eq!(first.jumpkind(), second.jumpkind());
        let tags: Vec<_> = first.stmts().map(|s| s.tag()).collect();
        let tags2: Vec<_> = second.stmts().map(|s| s.tag()).collect();
        assert_eq!(tags, tags2);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_renders_like_the_producer() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        synth.imark(0x1000, 4, 0);
        let x0 = synth.get(16, IrType::I64);
        synth.wr_tmp(t0, x0);
        let data = synth.rd_tmp(t0);
        synth.put(32, data);
        let next = synth.constant(IrConst::U64(0x1004));
        synth.set_next(next);
        synth.set_offs_ip(272);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        assert_eq!(
            block.to_string(),
            "IRSB {\n   t0:I64   \n\n   ------ IMark(0x1000, 4, 0) ------\n   t0 = GET:I64(16)\n   PUT(32) = t0\n   PUT(272) = 0x1004:I64; exit-Boring\n}\n"
        );
    }

    #[test]
    fn test_atomic_and_guarded_statements_roundtrip() {
        let mut synth = BlockSynth::new();
        let t_old = synth.temp(IrType::I32);
        let t_res = synth.temp(IrType::I1);
        let t_ld = synth.temp(IrType::I32);
        let addr = synth.get(48, IrType::I64);
        let expd = synth.constant(IrConst::U32(1));
        let data = synth.constant(IrConst::U32(2));
        synth.cas(&CasSpec {
            old_hi: None,
            old_lo: t_old,
            end: IrEndness::Little,
            addr,
            expd_hi: None,
            expd_lo: expd,
            data_hi: None,
            data_lo: data,
        });
        synth.llsc(IrEndness::Little, t_ld, addr, None);
        synth.llsc(IrEndness::Little, t_res, addr, Some(data));
        let guard = synth.constant(IrConst::U1(true));
        let alt = synth.constant(IrConst::U32(0));
        synth.store_g(IrEndness::Little, addr, data, guard);
        synth.load_g(IrEndness::Little, IrLoadGOp::ILGop_16Uto32, t_ld, addr, alt, guard);
        synth.mbe(IrMBusEvent::Fence);
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let c = block.stmt(0).unwrap().as_cas().unwrap();
        assert_eq!(c.old_lo, t_old);
        assert!(c.old_hi.is_none() && c.expd_hi.is_none() && c.data_hi.is_none());

        let ll = block.stmt(1).unwrap().as_llsc().unwrap();
        assert!(ll.storedata.is_none());
        let sc = block.stmt(2).unwrap().as_llsc().unwrap();
        assert!(sc.storedata.is_some());
        assert_eq!(sc.result, t_res);

        let sg = block.stmt(3).unwrap().as_store_g().unwrap();
        assert_eq!(sg.guard.as_const().unwrap(), IrConst::U1(true));
        let lg = block.stmt(4).unwrap().as_load_g().unwrap();
        assert_eq!(lg.cvt, IrLoadGOp::ILGop_16Uto32);
        assert_eq!(lg.dst, t_ld);

        assert!(matches!(
            block.stmt(5).unwrap().decode().unwrap(),
            Stmt::Mbe(IrMBusEvent::Fence)
        ));
    }

    #[test]
    fn test_helper_calls_roundtrip() {
        let mut synth = BlockSynth::new();
        let t0 = synth.temp(IrType::I64);
        let t1 = synth.temp(IrType::I32);
        let a0 = synth.rd_tmp(t0);
        let marker = synth.gsptr();
        let call = synth.ccall("calculate_flags", 0, IrType::I32, &[a0, marker]);
        synth.wr_tmp(t1, call);
        let guard = synth.constant(IrConst::U1(true));
        let spec_args = [a0];
        synth.dirty(
            guard,
            &DirtySpec {
                name: "read_cycle_counter",
                regparms: 1,
                tmp: Some(t0),
                args: &spec_args,
                mem: None,
                state: &[StateEffect {
                    fx: IrEffect::Read,
                    offset: 16,
                    size: 8,
                    n_repeats: 0,
                    repeat_len: 0,
                }],
            },
        );
        let sealed = synth.seal();
        let block = sealed.block().unwrap();

        let w = block.stmt(0).unwrap().as_wr_tmp().unwrap();
        let Expr::CCall(call) = w.data.decode().unwrap() else {
            panic!("expected a ccall");
        };
        assert_eq!(call.callee.name.to_str().unwrap(), "calculate_flags");
        assert_eq!(call.ret_ty, IrType::I32);
        assert_eq!(call.args.len(), 2);
        assert!(matches!(call.args[1].decode().unwrap(), Expr::GsPtr));

        let d = block.stmt(1).unwrap().as_dirty().unwrap();
        assert_eq!(d.callee.name.to_str().unwrap(), "read_cycle_counter");
        assert_eq!(d.tmp, Some(t0));
        assert_eq!(d.args.len(), 1);
        assert!(d.mem.is_none());
        assert_eq!(d.fx_state.len(), 1);
        assert_eq!(d.fx_state[0].fx, IrEffect::Read);
    }

    #[test]
    fn test_malformed_nodes_fail_binding() {
        let mut synth = BlockSynth::new();
        synth.raw_stmt_tag(0x1EFF);
        let sealed = synth.seal();
        assert!(matches!(
            sealed.block(),
            Err(DecodeError::UnknownEnumValue(IrError::UnknownEnum {
                what: "IRStmtTag",
                code: 0x1EFF
            }))
        ));

        let mut synth = BlockSynth::new();
        let bad = synth.raw_expr_tag(0x18FF);
        synth.set_next(bad);
        let sealed = synth.seal();
        assert!(matches!(
            sealed.block(),
            Err(DecodeError::UnknownEnumValue(IrError::UnknownEnum {
                what: "IRExprTag",
                code: 0x18FF
            }))
        ));
    }
}
