//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
///
/// 描述和帮助两种弹窗都是纯展示，唯一能做的就是关掉
pub fn update(app: &mut App, msg: ModalMessage) {
    if !app.modal.is_open() {
        return;
    }

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }
    }
}
