//! Guest-state register offsets.
//!
//! Get and Put statements address guest registers as byte offsets into
//! the architecture's state block. These tables pin the offsets for the
//! guests the producer is commonly pointed at, and [`offset_name`] is
//! the reverse lookup printers use to label them.

use crate::VexArch;

/// AMD64 guest-state offsets.
pub mod amd64 {
    pub const RAX: i32 = 16;
    pub const RCX: i32 = 24;
    pub const RDX: i32 = 32;
    pub const RBX: i32 = 40;
    pub const RSP: i32 = 48;
    pub const RBP: i32 = 56;
    pub const RSI: i32 = 64;
    pub const RDI: i32 = 72;
    pub const R8: i32 = 80;
    pub const R9: i32 = 88;
    pub const R10: i32 = 96;
    pub const R11: i32 = 104;
    pub const R12: i32 = 112;
    pub const R13: i32 = 120;
    pub const R14: i32 = 128;
    pub const R15: i32 = 136;
    pub const CC_OP: i32 = 144;
    pub const CC_DEP1: i32 = 152;
    pub const CC_DEP2: i32 = 160;
    pub const CC_NDEP: i32 = 168;
    pub const DFLAG: i32 = 176;
    pub const RIP: i32 = 184;
    pub const ACFLAG: i32 = 192;
    pub const IDFLAG: i32 = 200;
    pub const FS_CONST: i32 = 208;
    pub const SSEROUND: i32 = 216;

    pub(super) const NAMES: &[(i32, &str)] = &[
        (RAX, "rax"),
        (RCX, "rcx"),
        (RDX, "rdx"),
        (RBX, "rbx"),
        (RSP, "rsp"),
        (RBP, "rbp"),
        (RSI, "rsi"),
        (RDI, "rdi"),
        (R8, "r8"),
        (R9, "r9"),
        (R10, "r10"),
        (R11, "r11"),
        (R12, "r12"),
        (R13, "r13"),
        (R14, "r14"),
        (R15, "r15"),
        (CC_OP, "cc_op"),
        (CC_DEP1, "cc_dep1"),
        (CC_DEP2, "cc_dep2"),
        (CC_NDEP, "cc_ndep"),
        (DFLAG, "dflag"),
        (RIP, "rip"),
        (ACFLAG, "acflag"),
        (IDFLAG, "idflag"),
        (FS_CONST, "fs_const"),
        (SSEROUND, "sseround"),
    ];
}

/// X86 guest-state offsets.
pub mod x86 {
    pub const EAX: i32 = 8;
    pub const ECX: i32 = 12;
    pub const EDX: i32 = 16;
    pub const EBX: i32 = 20;
    pub const ESP: i32 = 24;
    pub const EBP: i32 = 28;
    pub const ESI: i32 = 32;
    pub const EDI: i32 = 36;
    pub const CC_OP: i32 = 40;
    pub const CC_DEP1: i32 = 44;
    pub const CC_DEP2: i32 = 48;
    pub const CC_NDEP: i32 = 52;
    pub const DFLAG: i32 = 56;
    pub const IDFLAG: i32 = 60;
    pub const ACFLAG: i32 = 64;
    pub const EIP: i32 = 68;

    pub(super) const NAMES: &[(i32, &str)] = &[
        (EAX, "eax"),
        (ECX, "ecx"),
        (EDX, "edx"),
        (EBX, "ebx"),
        (ESP, "esp"),
        (EBP, "ebp"),
        (ESI, "esi"),
        (EDI, "edi"),
        (CC_OP, "cc_op"),
        (CC_DEP1, "cc_dep1"),
        (CC_DEP2, "cc_dep2"),
        (CC_NDEP, "cc_ndep"),
        (DFLAG, "dflag"),
        (IDFLAG, "idflag"),
        (ACFLAG, "acflag"),
        (EIP, "eip"),
    ];
}

/// ARM64 guest-state offsets.
pub mod arm64 {
    /// Offset of general register `Xn`.
    #[must_use]
    pub const fn x(n: u32) -> i32 {
        16 + 8 * n as i32
    }

    pub const XSP: i32 = 264;
    pub const PC: i32 = 272;
    pub const CC_OP: i32 = 280;
    pub const CC_DEP1: i32 = 288;
    pub const CC_DEP2: i32 = 296;
    pub const CC_NDEP: i32 = 304;
    pub const TPIDR_EL0: i32 = 312;

    pub(super) const NAMES: &[(i32, &str)] = &[
        (x(0), "x0"),
        (x(1), "x1"),
        (x(2), "x2"),
        (x(3), "x3"),
        (x(4), "x4"),
        (x(5), "x5"),
        (x(6), "x6"),
        (x(7), "x7"),
        (x(8), "x8"),
        (x(9), "x9"),
        (x(10), "x10"),
        (x(11), "x11"),
        (x(12), "x12"),
        (x(13), "x13"),
        (x(14), "x14"),
        (x(15), "x15"),
        (x(16), "x16"),
        (x(17), "x17"),
        (x(18), "x18"),
        (x(19), "x19"),
        (x(20), "x20"),
        (x(21), "x21"),
        (x(22), "x22"),
        (x(23), "x23"),
        (x(24), "x24"),
        (x(25), "x25"),
        (x(26), "x26"),
        (x(27), "x27"),
        (x(28), "x28"),
        (x(29), "x29"),
        (x(30), "x30"),
        (XSP, "xsp"),
        (PC, "pc"),
        (CC_OP, "cc_op"),
        (CC_DEP1, "cc_dep1"),
        (CC_DEP2, "cc_dep2"),
        (CC_NDEP, "cc_ndep"),
        (TPIDR_EL0, "tpidr_el0"),
    ];
}

/// Names the register at `offset`, for guests with a pinned table.
#[must_use]
pub fn offset_name(arch: VexArch, offset: i32) -> Option<&'static str> {
    let names = match arch {
        VexArch::X86 => x86::NAMES,
        VexArch::Amd64 => amd64::NAMES,
        VexArch::Arm64 => arm64::NAMES,
        _ => return None,
    };
    names
        .iter()
        .find(|&&(at, _)| at == offset)
        .map(|&(_, name)| name)
}
