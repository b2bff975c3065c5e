use super::{
    messages::{internal::PrivateMsg, MessageDialogInput, MessageDialogOutput},
    model::MessageDialog,
};
use crate::message::MessageResult;
use log::*;
use mxl_relm4_components::relm4::{self, adw::gtk::prelude::*, prelude::*};
use std::collections::VecDeque;

fn button_label(result: MessageResult) -> String {
    result.label().unwrap_or_default()
}

#[relm4::component(pub)]
impl Component for MessageDialog {
    type Init = ();
    type Input = MessageDialogInput;
    type Output = MessageDialogOutput;
    type CommandOutput = ();

    view! {
        #[name(dialog)]
        adw::Window {
            #[watch]
            set_title: Some(model.caption()),
            set_modal: true,
            set_hide_on_close: true,
            set_destroy_with_parent: true,
            set_width_request: 420,
            #[watch]
            set_visible: !model.hidden,
            connect_close_request[sender] => move |_| {
                sender.input(MessageDialogInput::PrivateMessage(PrivateMsg::CloseRequested));
                gtk::glib::Propagation::Stop
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                adw::HeaderBar {
                    set_show_end_title_buttons: false,
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_margin_all: 12,
                    set_spacing: 12,

                    gtk::Box {
                        set_spacing: 12,

                        gtk::Image {
                            set_pixel_size: 48,
                            set_valign: gtk::Align::Start,
                            #[watch]
                            set_icon_name: model.icon_name(),
                            #[watch]
                            set_visible: model.icon_name().is_some(),
                        },

                        gtk::TextView {
                            set_buffer: Some(&model.text_buffer),
                            set_vexpand: true,
                            set_hexpand: true,
                            set_editable: false,
                            set_wrap_mode: gtk::WrapMode::Word,
                            set_cursor_visible: false,
                        },
                    },

                    gtk::Box {
                        set_hexpand: true,
                        set_homogeneous: true,
                        set_spacing: 8,

                        gtk::Button {
                            set_label: &button_label(MessageResult::Ok),
                            set_hexpand: true,
                            add_css_class: "suggested-action",
                            #[watch]
                            set_visible: model.offers(MessageResult::Ok),
                            connect_clicked => MessageDialogInput::PrivateMessage(PrivateMsg::ButtonPressed(MessageResult::Ok)),
                        },

                        gtk::Button {
                            set_label: &button_label(MessageResult::Yes),
                            set_hexpand: true,
                            add_css_class: "suggested-action",
                            #[watch]
                            set_visible: model.offers(MessageResult::Yes),
                            connect_clicked => MessageDialogInput::PrivateMessage(PrivateMsg::ButtonPressed(MessageResult::Yes)),
                        },

                        gtk::Button {
                            set_label: &button_label(MessageResult::No),
                            set_hexpand: true,
                            #[watch]
                            set_visible: model.offers(MessageResult::No),
                            connect_clicked => MessageDialogInput::PrivateMessage(PrivateMsg::ButtonPressed(MessageResult::No)),
                        },

                        gtk::Button {
                            set_label: &button_label(MessageResult::Cancel),
                            set_hexpand: true,
                            #[watch]
                            set_visible: model.offers(MessageResult::Cancel),
                            connect_clicked => MessageDialogInput::PrivateMessage(PrivateMsg::ButtonPressed(MessageResult::Cancel)),
                        },
                    },
                },
            },
        }
    }

    fn init(_init: (), root: Self::Root, sender: ComponentSender<Self>) -> ComponentParts<Self> {
        let model = MessageDialog {
            hidden: true,
            current: None,
            queue: VecDeque::new(),
            text_buffer: gtk::TextBuffer::new(None),
        };
        let widgets = view_output!();

        {
            let controller = gtk::EventControllerKey::new();
            controller.connect_key_pressed(move |_, key, _keycode, _modifiers| {
                if key == gtk::gdk::Key::Escape {
                    sender.input(MessageDialogInput::PrivateMessage(PrivateMsg::CloseRequested));
                    return gtk::glib::Propagation::Stop;
                }
                gtk::glib::Propagation::Proceed
            });
            root.add_controller(controller);
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>, _root: &Self::Root) {
        match msg {
            MessageDialogInput::PrivateMessage(msg) => {
                let result = match msg {
                    PrivateMsg::ButtonPressed(result) => result,
                    PrivateMsg::CloseRequested => match &self.current {
                        Some((message, _)) => message.button().dismiss_result(),
                        None => return,
                    },
                };
                if let Some((message, completion)) = self.current.take() {
                    debug!("Message '{}' dismissed with {result:?}", message.caption());
                    let output_sender = sender.output_sender().clone();
                    completion.complete_when_idle(result, move || {
                        output_sender
                            .send(MessageDialogOutput::Dismissed(result))
                            .unwrap_or_default();
                    });
                }
                self.show_next();
            }
            MessageDialogInput::Show(message, completion) => {
                self.queue.push_back((message, completion));
                if self.current.is_none() {
                    self.show_next();
                } else {
                    trace!("Message queued behind '{}'", self.caption());
                }
            }
        }
    }
}

impl MessageDialog {
    fn show_next(&mut self) {
        match self.queue.pop_front() {
            Some((message, completion)) => {
                self.text_buffer.set_text(message.text());
                self.current = Some((message, completion));
                self.hidden = false;
            }
            None => self.hidden = true,
        }
    }
}
