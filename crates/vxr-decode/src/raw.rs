//! Producer-side memory layouts.
//!
//! Every type here mirrors, field for field, the C struct the lifter
//! library populates. The decoder reads these through raw pointers, so
//! field order, widths, and padding must stay bit-compatible with the
//! producer. Tagged unions are modelled as a `u32` tag next to a real
//! `union`; nothing in this module interprets the tag, that is the
//! decoder's job. Nothing in this module owns memory.

use std::ffi::{c_char, c_void};

/// Type environment: one type code per temporary, indexed by temporary id.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawTypeEnv {
    pub types: *const u32,
    pub types_size: i32,
    pub types_used: i32,
}

/// Superblock root handed back by one lift call.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawSb {
    pub tyenv: *const RawTypeEnv,
    pub stmts: *const *const RawStmt,
    pub stmts_size: i32,
    pub stmts_used: i32,
    pub next: *const RawExpr,
    pub jumpkind: u32,
    pub offs_ip: i32,
}

/// Circular register file descriptor shared by GetI and PutI.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawRegArray {
    pub base: i32,
    pub elem_ty: u32,
    pub n_elems: i32,
}

/// Descriptor of a callable helper routine.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawCallee {
    pub regparms: i32,
    pub name: *const c_char,
    pub addr: *const c_void,
    pub mcx_mask: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawConstValue {
    pub u1: u8,
    pub u8: u8,
    pub u16: u16,
    pub u32: u32,
    pub u64: u64,
    pub f32: f32,
    pub f32i: u32,
    pub f64: f64,
    pub f64i: u64,
    pub v128: u16,
    pub v256: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawConst {
    pub tag: u32,
    pub value: RawConstValue,
}

/// Out-of-line payload of a quaternary operation expression.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawQop {
    pub op: u32,
    pub arg1: *const RawExpr,
    pub arg2: *const RawExpr,
    pub arg3: *const RawExpr,
    pub arg4: *const RawExpr,
}

/// Out-of-line payload of a ternary operation expression.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawTriop {
    pub op: u32,
    pub arg1: *const RawExpr,
    pub arg2: *const RawExpr,
    pub arg3: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawGet {
    pub offset: i32,
    pub ty: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawGetI {
    pub descr: *const RawRegArray,
    pub ix: *const RawExpr,
    pub bias: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawBinop {
    pub op: u32,
    pub arg1: *const RawExpr,
    pub arg2: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawUnop {
    pub op: u32,
    pub arg: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawLoad {
    pub end: u32,
    pub ty: u32,
    pub addr: *const RawExpr,
}

/// Call argument vectors are null-terminated arrays of expression links.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawCCall {
    pub cee: *const RawCallee,
    pub ret_ty: u32,
    pub args: *const *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawIte {
    pub cond: *const RawExpr,
    pub iftrue: *const RawExpr,
    pub iffalse: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawExprPayload {
    pub binder: i32,
    pub get: RawGet,
    pub get_i: RawGetI,
    pub rd_tmp: u32,
    pub qop: *const RawQop,
    pub triop: *const RawTriop,
    pub binop: RawBinop,
    pub unop: RawUnop,
    pub load: RawLoad,
    pub con: *const RawConst,
    pub ccall: RawCCall,
    pub ite: RawIte,
}

/// Expression node: tag plus variant payload.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawExpr {
    pub tag: u32,
    pub payload: RawExprPayload,
}

/// Out-of-line payload of an indexed state write.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawPutI {
    pub descr: *const RawRegArray,
    pub ix: *const RawExpr,
    pub bias: i32,
    pub data: *const RawExpr,
}

/// Out-of-line payload of a guarded store.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawStoreG {
    pub end: u32,
    pub addr: *const RawExpr,
    pub data: *const RawExpr,
    pub guard: *const RawExpr,
}

/// Out-of-line payload of a guarded load with widening conversion.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawLoadG {
    pub end: u32,
    pub cvt: u32,
    pub dst: u32,
    pub addr: *const RawExpr,
    pub alt: *const RawExpr,
    pub guard: *const RawExpr,
}

/// Out-of-line payload of a compare-and-swap.
///
/// `old_hi`, `expd_hi` and `data_hi` are only populated for double-width
/// exchanges; `old_hi` holds the invalid-temporary sentinel otherwise and
/// the expression links are null.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawCas {
    pub old_hi: u32,
    pub old_lo: u32,
    pub end: u32,
    pub addr: *const RawExpr,
    pub expd_hi: *const RawExpr,
    pub expd_lo: *const RawExpr,
    pub data_hi: *const RawExpr,
    pub data_lo: *const RawExpr,
}

/// One guest-state effect annotation on a dirty call.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawFxState {
    pub fx: u16,
    pub offset: u16,
    pub size: u16,
    pub n_repeats: u8,
    pub repeat_len: u8,
}

/// Number of guest-state effect slots carried by a dirty call.
pub const N_FX_STATE: usize = 7;

/// Out-of-line payload of a side-effecting helper call.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawDirty {
    pub cee: *const RawCallee,
    pub guard: *const RawExpr,
    pub args: *const *const RawExpr,
    pub tmp: u32,
    pub m_fx: u32,
    pub m_addr: *const RawExpr,
    pub m_size: i32,
    pub n_fx_state: i32,
    pub fx_state: [RawFxState; N_FX_STATE],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawIMark {
    pub addr: u64,
    pub len: u32,
    pub delta: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawAbiHint {
    pub base: *const RawExpr,
    pub len: i32,
    pub nia: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawPut {
    pub offset: i32,
    pub data: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawWrTmp {
    pub tmp: u32,
    pub data: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawStore {
    pub end: u32,
    pub addr: *const RawExpr,
    pub data: *const RawExpr,
}

/// Load-linked when `storedata` is null, store-conditional otherwise.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawLlsc {
    pub end: u32,
    pub result: u32,
    pub addr: *const RawExpr,
    pub storedata: *const RawExpr,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawExit {
    pub guard: *const RawExpr,
    pub dst: *const RawConst,
    pub jk: u32,
    pub offs_ip: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawStmtPayload {
    pub imark: RawIMark,
    pub abi_hint: RawAbiHint,
    pub put: RawPut,
    pub put_i: *const RawPutI,
    pub wr_tmp: RawWrTmp,
    pub store: RawStore,
    pub store_g: *const RawStoreG,
    pub load_g: *const RawLoadG,
    pub cas: *const RawCas,
    pub llsc: RawLlsc,
    pub dirty: *const RawDirty,
    pub mbe: u32,
    pub exit: RawExit,
}

/// Statement node: tag plus variant payload. NoOp carries no payload.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawStmt {
    pub tag: u32,
    pub payload: RawStmtPayload,
}

#[cfg(test)]
#[cfg(target_pointer_width = "64")]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn test_sizes_match_producer_structs() {
        assert_eq!(size_of::<RawTypeEnv>(), 16);
        assert_eq!(size_of::<RawSb>(), 40);
        assert_eq!(size_of::<RawRegArray>(), 12);
        assert_eq!(size_of::<RawCallee>(), 32);
        assert_eq!(size_of::<RawConst>(), 16);
        assert_eq!(size_of::<RawQop>(), 40);
        assert_eq!(size_of::<RawTriop>(), 32);
        assert_eq!(size_of::<RawExpr>(), 32);
        assert_eq!(size_of::<RawPutI>(), 32);
        assert_eq!(size_of::<RawStoreG>(), 32);
        assert_eq!(size_of::<RawLoadG>(), 40);
        assert_eq!(size_of::<RawCas>(), 56);
        assert_eq!(size_of::<RawFxState>(), 8);
        assert_eq!(size_of::<RawDirty>(), 104);
        assert_eq!(size_of::<RawStmt>(), 32);
    }

    #[test]
    fn test_payloads_sit_after_padded_tags() {
        assert_eq!(offset_of!(RawExpr, payload), 8);
        assert_eq!(offset_of!(RawStmt, payload), 8);
        assert_eq!(offset_of!(RawConst, value), 8);
    }

    #[test]
    fn test_block_root_field_offsets() {
        assert_eq!(offset_of!(RawSb, stmts), 8);
        assert_eq!(offset_of!(RawSb, stmts_size), 16);
        assert_eq!(offset_of!(RawSb, stmts_used), 20);
        assert_eq!(offset_of!(RawSb, next), 24);
        assert_eq!(offset_of!(RawSb, jumpkind), 32);
        assert_eq!(offset_of!(RawSb, offs_ip), 36);
    }

    #[test]
    fn test_detail_struct_field_offsets() {
        assert_eq!(offset_of!(RawCas, end), 8);
        assert_eq!(offset_of!(RawCas, addr), 16);
        assert_eq!(offset_of!(RawLoadG, dst), 8);
        assert_eq!(offset_of!(RawLoadG, addr), 16);
        assert_eq!(offset_of!(RawDirty, tmp), 24);
        assert_eq!(offset_of!(RawDirty, m_addr), 32);
        assert_eq!(offset_of!(RawDirty, fx_state), 48);
        assert_eq!(offset_of!(RawCallee, name), 8);
        assert_eq!(offset_of!(RawCallee, mcx_mask), 24);
    }
}
