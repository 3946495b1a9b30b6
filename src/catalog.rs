// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Names of the standard terminfo capabilities
//!
//! The tables follow the ordinal order of ncurses `Caps` (terminfo 5 with the
//! `OT*` termcap compatibility entries at the end). An ordinal is the position
//! of a value within its section of a compiled terminfo file.
//!
//! Names are stored packed, NUL separated. Each table is split into an index
//! the first time it is used, so lookups afterwards are constant time.

use std::{fmt, sync::LazyLock};

/// Number of standard boolean capabilities
pub const MAX_BOOLEANS: usize = 44;
/// Number of standard numeric capabilities
pub const MAX_NUMBERS: usize = 39;
/// Number of standard string capabilities
pub const MAX_STRINGS: usize = 414;

/// Name returned for an ordinal past the end of a table
pub const UNKNOWN: &str = "unknown";

/// Capability classes, one per section of a compiled terminfo file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    Boolean,
    Number,
    String,
}

impl Class {
    /// All classes in file section order
    pub const ALL: [Self; 3] = [Self::Boolean, Self::Number, Self::String];

    /// Number of standard capabilities in the class
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Boolean => MAX_BOOLEANS,
            Self::Number => MAX_NUMBERS,
            Self::String => MAX_STRINGS,
        }
    }

    fn names(self) -> &'static [&'static str] {
        match self {
            Self::Boolean => &BOOLEAN_NAMES,
            Self::Number => &NUMBER_NAMES,
            Self::String => &STRING_NAMES,
        }
    }

    fn capnames(self) -> &'static [&'static str] {
        match self {
            Self::Boolean => &BOOLEAN_CAPNAMES,
            Self::Number => &NUMBER_CAPNAMES,
            Self::String => &STRING_CAPNAMES,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Boolean => "boolean",
            Self::Number => "numeric",
            Self::String => "string",
        })
    }
}

/// Long name of a capability, e.g. `auto_left_margin`
///
/// Returns [`UNKNOWN`] if `ordinal` is out of range for the class.
#[must_use]
pub fn name_of(class: Class, ordinal: usize) -> &'static str {
    class.names().get(ordinal).copied().unwrap_or(UNKNOWN)
}

/// Short terminfo name of a capability, e.g. `bw`
///
/// Returns [`UNKNOWN`] if `ordinal` is out of range for the class.
#[must_use]
pub fn capname_of(class: Class, ordinal: usize) -> &'static str {
    class.capnames().get(ordinal).copied().unwrap_or(UNKNOWN)
}

/// Find the ordinal of a capability by its long or short name
#[must_use]
pub fn ordinal_of(class: Class, name: &str) -> Option<usize> {
    class
        .names()
        .iter()
        .position(|n| *n == name)
        .or_else(|| class.capnames().iter().position(|n| *n == name))
}

fn split_packed(packed: &'static str) -> Vec<&'static str> {
    packed.split_terminator('\0').collect()
}

static BOOLEAN_NAMES: LazyLock<Vec<&str>> = LazyLock::new(|| split_packed(BOOLEAN_NAMES_PACKED));
static BOOLEAN_CAPNAMES: LazyLock<Vec<&str>> =
    LazyLock::new(|| split_packed(BOOLEAN_CAPNAMES_PACKED));
static NUMBER_NAMES: LazyLock<Vec<&str>> = LazyLock::new(|| split_packed(NUMBER_NAMES_PACKED));
static NUMBER_CAPNAMES: LazyLock<Vec<&str>> =
    LazyLock::new(|| split_packed(NUMBER_CAPNAMES_PACKED));
static STRING_NAMES: LazyLock<Vec<&str>> = LazyLock::new(|| split_packed(STRING_NAMES_PACKED));
static STRING_CAPNAMES: LazyLock<Vec<&str>> =
    LazyLock::new(|| split_packed(STRING_CAPNAMES_PACKED));

/// Long boolean capability names in ordinal order
const BOOLEAN_NAMES_PACKED: &str = "auto_left_margin\0auto_right_margin\0no_esc_ctlc\0\
    ceol_standout_glitch\0eat_newline_glitch\0erase_overstrike\0generic_type\0hard_copy\0\
    has_meta_key\0has_status_line\0insert_null_glitch\0memory_below\0memory_above\0\
    move_insert_mode\0move_standout_mode\0over_strike\0status_line_esc_ok\0dest_tabs_magic_smso\0\
    tilde_glitch\0transparent_underline\0xon_xoff\0needs_xon_xoff\0prtr_silent\0hard_cursor\0\
    non_rev_rmcup\0no_pad_char\0non_dest_scroll_region\0can_change\0back_color_erase\0\
    hue_lightness_saturation\0col_addr_glitch\0cr_cancels_micro_mode\0has_print_wheel\0\
    row_addr_glitch\0semi_auto_right_margin\0cpi_changes_res\0lpi_changes_res\0\
    backspaces_with_bs\0crt_no_scrolling\0no_correctly_working_cr\0gnu_has_meta_key\0\
    linefeed_is_newline\0has_hardware_tabs\0return_does_clr_eol\0";

/// Short boolean capability names in ordinal order
const BOOLEAN_CAPNAMES_PACKED: &str = "bw\0am\0xsb\0xhp\0xenl\0eo\0gn\0hc\0km\0hs\0in\0db\0da\0\
    mir\0msgr\0os\0eslok\0xt\0hz\0ul\0xon\0nxon\0mc5i\0chts\0nrrmc\0npc\0ndscr\0ccc\0bce\0hls\0\
    xhpa\0crxm\0daisy\0xvpa\0sam\0cpix\0lpix\0OTbs\0OTns\0OTnc\0OTMT\0OTNL\0OTpt\0OTxr\0";

/// Long number capability names in ordinal order
const NUMBER_NAMES_PACKED: &str = "columns\0init_tabs\0lines\0lines_of_memory\0\
    magic_cookie_glitch\0padding_baud_rate\0virtual_terminal\0width_status_line\0num_labels\0\
    label_height\0label_width\0max_attributes\0maximum_windows\0max_colors\0max_pairs\0\
    no_color_video\0buffer_capacity\0dot_vert_spacing\0dot_horz_spacing\0max_micro_address\0\
    max_micro_jump\0micro_col_size\0micro_line_size\0number_of_pins\0output_res_char\0\
    output_res_line\0output_res_horz_inch\0output_res_vert_inch\0print_rate\0wide_char_size\0\
    buttons\0bit_image_entwining\0bit_image_type\0magic_cookie_glitch_ul\0carriage_return_delay\0\
    new_line_delay\0backspace_delay\0horizontal_tab_delay\0number_of_function_keys\0";

/// Short number capability names in ordinal order
const NUMBER_CAPNAMES_PACKED: &str = "cols\0it\0lines\0lm\0xmc\0pb\0vt\0wsl\0nlab\0lh\0lw\0ma\0\
    wnum\0colors\0pairs\0ncv\0bufsz\0spinv\0spinh\0maddr\0mjump\0mcs\0mls\0npins\0orc\0orl\0orhi\0\
    orvi\0cps\0widcs\0btns\0bitwin\0bitype\0UTug\0OTdC\0OTdN\0OTdB\0OTdT\0OTkn\0";

/// Long string capability names in ordinal order
const STRING_NAMES_PACKED: &str = "back_tab\0bell\0carriage_return\0change_scroll_region\0\
    clear_all_tabs\0clear_screen\0clr_eol\0clr_eos\0column_address\0command_character\0\
    cursor_address\0cursor_down\0cursor_home\0cursor_invisible\0cursor_left\0cursor_mem_address\0\
    cursor_normal\0cursor_right\0cursor_to_ll\0cursor_up\0cursor_visible\0delete_character\0\
    delete_line\0dis_status_line\0down_half_line\0enter_alt_charset_mode\0enter_blink_mode\0\
    enter_bold_mode\0enter_ca_mode\0enter_delete_mode\0enter_dim_mode\0enter_insert_mode\0\
    enter_secure_mode\0enter_protected_mode\0enter_reverse_mode\0enter_standout_mode\0\
    enter_underline_mode\0erase_chars\0exit_alt_charset_mode\0exit_attribute_mode\0exit_ca_mode\0\
    exit_delete_mode\0exit_insert_mode\0exit_standout_mode\0exit_underline_mode\0flash_screen\0\
    form_feed\0from_status_line\0init_1string\0init_2string\0init_3string\0init_file\0\
    insert_character\0insert_line\0insert_padding\0key_backspace\0key_catab\0key_clear\0key_ctab\0\
    key_dc\0key_dl\0key_down\0key_eic\0key_eol\0key_eos\0key_f0\0key_f1\0key_f10\0key_f2\0key_f3\0\
    key_f4\0key_f5\0key_f6\0key_f7\0key_f8\0key_f9\0key_home\0key_ic\0key_il\0key_left\0key_ll\0\
    key_npage\0key_ppage\0key_right\0key_sf\0key_sr\0key_stab\0key_up\0keypad_local\0keypad_xmit\0\
    lab_f0\0lab_f1\0lab_f10\0lab_f2\0lab_f3\0lab_f4\0lab_f5\0lab_f6\0lab_f7\0lab_f8\0lab_f9\0\
    meta_off\0meta_on\0newline\0pad_char\0parm_dch\0parm_delete_line\0parm_down_cursor\0parm_ich\0\
    parm_index\0parm_insert_line\0parm_left_cursor\0parm_right_cursor\0parm_rindex\0\
    parm_up_cursor\0pkey_key\0pkey_local\0pkey_xmit\0print_screen\0prtr_off\0prtr_on\0\
    repeat_char\0reset_1string\0reset_2string\0reset_3string\0reset_file\0restore_cursor\0\
    row_address\0save_cursor\0scroll_forward\0scroll_reverse\0set_attributes\0set_tab\0\
    set_window\0tab\0to_status_line\0underline_char\0up_half_line\0init_prog\0key_a1\0key_a3\0\
    key_b2\0key_c1\0key_c3\0prtr_non\0char_padding\0acs_chars\0plab_norm\0key_btab\0\
    enter_xon_mode\0exit_xon_mode\0enter_am_mode\0exit_am_mode\0xon_character\0xoff_character\0\
    ena_acs\0label_on\0label_off\0key_beg\0key_cancel\0key_close\0key_command\0key_copy\0\
    key_create\0key_end\0key_enter\0key_exit\0key_find\0key_help\0key_mark\0key_message\0\
    key_move\0key_next\0key_open\0key_options\0key_previous\0key_print\0key_redo\0key_reference\0\
    key_refresh\0key_replace\0key_restart\0key_resume\0key_save\0key_suspend\0key_undo\0key_sbeg\0\
    key_scancel\0key_scommand\0key_scopy\0key_screate\0key_sdc\0key_sdl\0key_select\0key_send\0\
    key_seol\0key_sexit\0key_sfind\0key_shelp\0key_shome\0key_sic\0key_sleft\0key_smessage\0\
    key_smove\0key_snext\0key_soptions\0key_sprevious\0key_sprint\0key_sredo\0key_sreplace\0\
    key_sright\0key_srsume\0key_ssave\0key_ssuspend\0key_sundo\0req_for_input\0key_f11\0key_f12\0\
    key_f13\0key_f14\0key_f15\0key_f16\0key_f17\0key_f18\0key_f19\0key_f20\0key_f21\0key_f22\0\
    key_f23\0key_f24\0key_f25\0key_f26\0key_f27\0key_f28\0key_f29\0key_f30\0key_f31\0key_f32\0\
    key_f33\0key_f34\0key_f35\0key_f36\0key_f37\0key_f38\0key_f39\0key_f40\0key_f41\0key_f42\0\
    key_f43\0key_f44\0key_f45\0key_f46\0key_f47\0key_f48\0key_f49\0key_f50\0key_f51\0key_f52\0\
    key_f53\0key_f54\0key_f55\0key_f56\0key_f57\0key_f58\0key_f59\0key_f60\0key_f61\0key_f62\0\
    key_f63\0clr_bol\0clear_margins\0set_left_margin\0set_right_margin\0label_format\0set_clock\0\
    display_clock\0remove_clock\0create_window\0goto_window\0hangup\0dial_phone\0quick_dial\0\
    tone\0pulse\0flash_hook\0fixed_pause\0wait_tone\0user0\0user1\0user2\0user3\0user4\0user5\0\
    user6\0user7\0user8\0user9\0orig_pair\0orig_colors\0initialize_color\0initialize_pair\0\
    set_color_pair\0set_foreground\0set_background\0change_char_pitch\0change_line_pitch\0\
    change_res_horz\0change_res_vert\0define_char\0enter_doublewide_mode\0enter_draft_quality\0\
    enter_italics_mode\0enter_leftward_mode\0enter_micro_mode\0enter_near_letter_quality\0\
    enter_normal_quality\0enter_shadow_mode\0enter_subscript_mode\0enter_superscript_mode\0\
    enter_upward_mode\0exit_doublewide_mode\0exit_italics_mode\0exit_leftward_mode\0\
    exit_micro_mode\0exit_shadow_mode\0exit_subscript_mode\0exit_superscript_mode\0\
    exit_upward_mode\0micro_column_address\0micro_down\0micro_left\0micro_right\0\
    micro_row_address\0micro_up\0order_of_pins\0parm_down_micro\0parm_left_micro\0\
    parm_right_micro\0parm_up_micro\0select_char_set\0set_bottom_margin\0set_bottom_margin_parm\0\
    set_left_margin_parm\0set_right_margin_parm\0set_top_margin\0set_top_margin_parm\0\
    start_bit_image\0start_char_set_def\0stop_bit_image\0stop_char_set_def\0subscript_characters\0\
    superscript_characters\0these_cause_cr\0zero_motion\0char_set_names\0key_mouse\0mouse_info\0\
    req_mouse_pos\0get_mouse\0set_a_foreground\0set_a_background\0pkey_plab\0device_type\0\
    code_set_init\0set0_des_seq\0set1_des_seq\0set2_des_seq\0set3_des_seq\0set_lr_margin\0\
    set_tb_margin\0bit_image_repeat\0bit_image_newline\0bit_image_carriage_return\0color_names\0\
    define_bit_image_region\0end_bit_image_region\0set_color_band\0set_page_length\0\
    display_pc_char\0enter_pc_charset_mode\0exit_pc_charset_mode\0enter_scancode_mode\0\
    exit_scancode_mode\0pc_term_options\0scancode_escape\0alt_scancode_esc\0\
    enter_horizontal_hl_mode\0enter_left_hl_mode\0enter_low_hl_mode\0enter_right_hl_mode\0\
    enter_top_hl_mode\0enter_vertical_hl_mode\0set_a_attributes\0set_pglen_inch\0termcap_init2\0\
    termcap_reset\0linefeed_if_not_lf\0backspace_if_not_bs\0other_non_function_keys\0\
    arrow_key_map\0acs_ulcorner\0acs_llcorner\0acs_urcorner\0acs_lrcorner\0acs_ltee\0acs_rtee\0\
    acs_btee\0acs_ttee\0acs_hline\0acs_vline\0acs_plus\0memory_lock\0memory_unlock\0box_chars_1\0";

/// Short string capability names in ordinal order
const STRING_CAPNAMES_PACKED: &str = "cbt\0bel\0cr\0csr\0tbc\0clear\0el\0ed\0hpa\0cmdch\0cup\0\
    cud1\0home\0civis\0cub1\0mrcup\0cnorm\0cuf1\0ll\0cuu1\0cvvis\0dch1\0dl1\0dsl\0hd\0smacs\0\
    blink\0bold\0smcup\0smdc\0dim\0smir\0invis\0prot\0rev\0smso\0smul\0ech\0rmacs\0sgr0\0rmcup\0\
    rmdc\0rmir\0rmso\0rmul\0flash\0ff\0fsl\0is1\0is2\0is3\0if\0ich1\0il1\0ip\0kbs\0ktbc\0kclr\0\
    kctab\0kdch1\0kdl1\0kcud1\0krmir\0kel\0ked\0kf0\0kf1\0kf10\0kf2\0kf3\0kf4\0kf5\0kf6\0kf7\0\
    kf8\0kf9\0khome\0kich1\0kil1\0kcub1\0kll\0knp\0kpp\0kcuf1\0kind\0kri\0khts\0kcuu1\0rmkx\0\
    smkx\0lf0\0lf1\0lf10\0lf2\0lf3\0lf4\0lf5\0lf6\0lf7\0lf8\0lf9\0rmm\0smm\0nel\0pad\0dch\0dl\0\
    cud\0ich\0indn\0il\0cub\0cuf\0rin\0cuu\0pfkey\0pfloc\0pfx\0mc0\0mc4\0mc5\0rep\0rs1\0rs2\0rs3\0\
    rf\0rc\0vpa\0sc\0ind\0ri\0sgr\0hts\0wind\0ht\0tsl\0uc\0hu\0iprog\0ka1\0ka3\0kb2\0kc1\0kc3\0\
    mc5p\0rmp\0acsc\0pln\0kcbt\0smxon\0rmxon\0smam\0rmam\0xonc\0xoffc\0enacs\0smln\0rmln\0kbeg\0\
    kcan\0kclo\0kcmd\0kcpy\0kcrt\0kend\0kent\0kext\0kfnd\0khlp\0kmrk\0kmsg\0kmov\0knxt\0kopn\0\
    kopt\0kprv\0kprt\0krdo\0kref\0krfr\0krpl\0krst\0kres\0ksav\0kspd\0kund\0kBEG\0kCAN\0kCMD\0\
    kCPY\0kCRT\0kDC\0kDL\0kslt\0kEND\0kEOL\0kEXT\0kFND\0kHLP\0kHOM\0kIC\0kLFT\0kMSG\0kMOV\0kNXT\0\
    kOPT\0kPRV\0kPRT\0kRDO\0kRPL\0kRIT\0kRES\0kSAV\0kSPD\0kUND\0rfi\0kf11\0kf12\0kf13\0kf14\0\
    kf15\0kf16\0kf17\0kf18\0kf19\0kf20\0kf21\0kf22\0kf23\0kf24\0kf25\0kf26\0kf27\0kf28\0kf29\0\
    kf30\0kf31\0kf32\0kf33\0kf34\0kf35\0kf36\0kf37\0kf38\0kf39\0kf40\0kf41\0kf42\0kf43\0kf44\0\
    kf45\0kf46\0kf47\0kf48\0kf49\0kf50\0kf51\0kf52\0kf53\0kf54\0kf55\0kf56\0kf57\0kf58\0kf59\0\
    kf60\0kf61\0kf62\0kf63\0el1\0mgc\0smgl\0smgr\0fln\0sclk\0dclk\0rmclk\0cwin\0wingo\0hup\0dial\0\
    qdial\0tone\0pulse\0hook\0pause\0wait\0u0\0u1\0u2\0u3\0u4\0u5\0u6\0u7\0u8\0u9\0op\0oc\0initc\0\
    initp\0scp\0setf\0setb\0cpi\0lpi\0chr\0cvr\0defc\0swidm\0sdrfq\0sitm\0slm\0smicm\0snlq\0\
    snrmq\0sshm\0ssubm\0ssupm\0sum\0rwidm\0ritm\0rlm\0rmicm\0rshm\0rsubm\0rsupm\0rum\0mhpa\0\
    mcud1\0mcub1\0mcuf1\0mvpa\0mcuu1\0porder\0mcud\0mcub\0mcuf\0mcuu\0scs\0smgb\0smgbp\0smglp\0\
    smgrp\0smgt\0smgtp\0sbim\0scsd\0rbim\0rcsd\0subcs\0supcs\0docr\0zerom\0csnm\0kmous\0minfo\0\
    reqmp\0getm\0setaf\0setab\0pfxl\0devt\0csin\0s0ds\0s1ds\0s2ds\0s3ds\0smglr\0smgtb\0birep\0\
    binel\0bicr\0colornm\0defbi\0endbi\0setcolor\0slines\0dispc\0smpch\0rmpch\0smsc\0rmsc\0pctrm\0\
    scesc\0scesa\0ehhlm\0elhlm\0elohlm\0erhlm\0ethlm\0evhlm\0sgr1\0slength\0OTi2\0OTrs\0OTnl\0\
    OTbs\0OTko\0OTma\0OTG2\0OTG3\0OTG1\0OTG4\0OTGR\0OTGL\0OTGU\0OTGD\0OTGH\0OTGV\0OTGC\0meml\0\
    memu\0box1\0";

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn table_sizes() {
        for class in Class::ALL {
            assert_eq!(class.names().len(), class.count(), "{class}");
            assert_eq!(class.capnames().len(), class.count(), "{class}");
        }
    }

    #[test]
    fn names_distinct_and_not_empty() {
        for class in Class::ALL {
            let names: BTreeSet<_> = (0..class.count()).map(|i| name_of(class, i)).collect();
            assert_eq!(names.len(), class.count(), "{class}");
            assert!(!names.contains(""));
            assert!(!names.contains(UNKNOWN));

            let capnames: BTreeSet<_> = (0..class.count()).map(|i| capname_of(class, i)).collect();
            assert_eq!(capnames.len(), class.count(), "{class}");
            assert!(!capnames.contains(""));
        }
    }

    #[test]
    fn boolean_order() {
        assert_eq!(name_of(Class::Boolean, 0), "auto_left_margin");
        assert_eq!(name_of(Class::Boolean, 1), "auto_right_margin");
        assert_eq!(capname_of(Class::Boolean, 4), "xenl");
        assert_eq!(name_of(Class::Boolean, 43), "return_does_clr_eol");
    }

    #[test]
    fn number_order() {
        assert_eq!(name_of(Class::Number, 0), "columns");
        assert_eq!(name_of(Class::Number, 2), "lines");
        assert_eq!(capname_of(Class::Number, 13), "colors");
        assert_eq!(name_of(Class::Number, 38), "number_of_function_keys");
    }

    #[test]
    fn string_order() {
        assert_eq!(name_of(Class::String, 0), "back_tab");
        assert_eq!(capname_of(Class::String, 0), "cbt");
        assert_eq!(name_of(Class::String, 10), "cursor_address");
        assert_eq!(capname_of(Class::String, 10), "cup");
        assert_eq!(name_of(Class::String, 359), "set_a_foreground");
        assert_eq!(name_of(Class::String, 413), "box_chars_1");
    }

    #[test]
    fn out_of_range() {
        assert_eq!(name_of(Class::Boolean, MAX_BOOLEANS), UNKNOWN);
        assert_eq!(name_of(Class::Number, MAX_NUMBERS), UNKNOWN);
        assert_eq!(capname_of(Class::String, MAX_STRINGS), UNKNOWN);
        assert_eq!(name_of(Class::String, usize::MAX), UNKNOWN);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(ordinal_of(Class::String, "back_tab"), Some(0));
        assert_eq!(ordinal_of(Class::String, "cup"), Some(10));
        assert_eq!(ordinal_of(Class::Number, "colors"), Some(13));
        assert_eq!(ordinal_of(Class::Number, "max_colors"), Some(13));
        assert_eq!(ordinal_of(Class::Boolean, "cup"), None);
        assert_eq!(ordinal_of(Class::Boolean, UNKNOWN), None);
    }
}
