//! 中文翻译 (zh-CN)

use super::keys::{
    HelpTexts, HintTexts, HomeTexts, LanguageTexts, ModalTexts, NavTexts, PreviewTexts,
    SectionsTexts, SettingsTexts, StatusTexts, ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        home: "主页",
        sections: "章节",
        preview: "预览",
        settings: "设置",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "欢迎使用简历构建器",
        tagline: "排序、重命名并启用或停用你的简历章节",
        total_label: "个目录章节",
        enabled_title: "已启用",
        enabled_label: "个章节将出现在简历中",
    },

    sections: SectionsTexts {
        unsaved: "未保存",
    },

    preview: PreviewTexts {
        no_sections: "没有启用中的章节",
        enable_hint: "在章节页按空格键启用章节",
    },

    settings: SettingsTexts {
        theme: ThemeTexts {
            label: "主题",
            dark: "深色",
            light: "浅色",
        },
        language: LanguageTexts { label: "语言" },
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        moving: "正在移动",
        order_updated: "顺序已更新",
        move_cancelled: "已取消移动",
        saved: "修改已保存",
        discarded: "修改已放弃",
        section_missing: "未找到章节",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panels: "切换面板",
        navigate: "导航",
        open: "进入",
        back: "返回",
        select: "选择",
        grab: "抓起",
        toggle: "启停",
        rename: "重命名",
        describe: "查看描述",
        save: "保存",
        discard: "放弃",
        adjust: "切换",
        move_section: "移动",
        drop: "放下",
        abort: "取消",
        done: "完成",
        delete_char: "删除",
        close: "关闭",
        help: "帮助",
        quit: "退出",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        close_hint: "按 Esc 或 Enter 关闭",
    },

    help: HelpTexts {
        title: "帮助",
        global: "全局快捷键",
        sections: "章节页",
        dragging: "拖拽中",
        close_hint: "按 Esc 关闭帮助",
    },
};
