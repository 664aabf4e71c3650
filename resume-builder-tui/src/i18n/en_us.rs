//! 英文翻译 (en-US)

use super::keys::{
    HelpTexts, HintTexts, HomeTexts, LanguageTexts, ModalTexts, NavTexts, PreviewTexts,
    SectionsTexts, SettingsTexts, StatusTexts, ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Home",
        sections: "Sections",
        preview: "Preview",
        settings: "Settings",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "Welcome to Resume Builder",
        tagline: "Arrange, rename and toggle the sections of your résumé",
        total_label: "sections in the catalog",
        enabled_title: "Enabled",
        enabled_label: "sections in your résumé",
    },

    sections: SectionsTexts {
        unsaved: "unsaved",
    },

    preview: PreviewTexts {
        no_sections: "No sections enabled",
        enable_hint: "Enable sections with Space on the Sections page",
    },

    settings: SettingsTexts {
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageTexts { label: "Language" },
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        moving: "Moving",
        order_updated: "Order updated",
        move_cancelled: "Move cancelled",
        saved: "Changes saved",
        discarded: "Changes discarded",
        section_missing: "Section not found",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panels: "Switch panel",
        navigate: "Navigate",
        open: "Open",
        back: "Back",
        select: "Select",
        grab: "Grab",
        toggle: "Toggle",
        rename: "Rename",
        describe: "Describe",
        save: "Save",
        discard: "Discard",
        adjust: "Change",
        move_section: "Move",
        drop: "Drop",
        abort: "Cancel",
        done: "Done",
        delete_char: "Delete",
        close: "Close",
        help: "Help",
        quit: "Quit",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        close_hint: "Press Esc or Enter to close",
    },

    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        sections: "Sections page",
        dragging: "While dragging",
        close_hint: "Press Esc to close the help",
    },
};
