use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config;
use crate::contact::controller::{
    FormController, Prefill, SubmissionState, BOROUGH, EMAIL, MESSAGE, NAME, PHONE, SERVICE_TYPE,
};
use crate::contact::submission::{SubmitError, SubmitterHandle};
use crate::contact::validation::Validity;
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub submitter: SubmitterHandle,
    #[prop_or_default]
    pub analytics: Analytics,
    #[prop_or_default]
    pub prefill: Prefill,
}

pub enum ContactFormMsg {
    Edit(&'static str, String),
    Blur(&'static str),
    ToggleCallTime(String, bool),
    Submit,
    Submitted(Result<(), SubmitError>),
    NoticeExpired(u32),
    DismissNotice,
}

pub struct ContactForm {
    form: FormController,
    notice_ref: NodeRef,
    scroll_to_notice: bool,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = FormController::new(ctx.props().analytics.clone());
        form.prefill(&ctx.props().prefill);

        Self {
            form,
            notice_ref: NodeRef::default(),
            scroll_to_notice: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.analytics != old_props.analytics {
            self.form.set_analytics(props.analytics.clone());
        }
        if props.prefill != old_props.prefill {
            self.form.prefill(&props.prefill);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit(name, value) => {
                self.form.edit(name, &value);
                true
            }
            ContactFormMsg::Blur(name) => {
                self.form.blur(name);
                true
            }
            ContactFormMsg::ToggleCallTime(value, checked) => {
                self.form.toggle_call_time(&value, checked);
                true
            }
            ContactFormMsg::Submit => {
                match self.form.begin_submit() {
                    Some(payload) => {
                        let submitter = ctx.props().submitter.clone();
                        ctx.link().send_future(async move {
                            ContactFormMsg::Submitted(submitter.submit(payload).await)
                        });
                    }
                    None => info!("Contact form not submitted, state {:?}", self.form.state()),
                }
                true
            }
            ContactFormMsg::Submitted(outcome) => {
                if let Some(notice) = self.form.finish_submit(outcome) {
                    let link = ctx.link().clone();
                    Timeout::new(config::SUCCESS_NOTICE_MS, move || {
                        link.send_message(ContactFormMsg::NoticeExpired(notice.id));
                    })
                    .forget();
                    self.scroll_to_notice = true;
                }
                true
            }
            ContactFormMsg::NoticeExpired(id) => {
                self.form.expire_notice(id);
                true
            }
            ContactFormMsg::DismissNotice => {
                self.form.dismiss_notice();
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_to_notice {
            self.scroll_to_notice = false;
            if let Some(notice) = self.notice_ref.cast::<web_sys::Element>() {
                scroll::scroll_into_center(&notice);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let control = self.form.control();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        html! {
            <div class="contact-form-wrapper">
                { self.view_notice(ctx) }
                {
                    if let (SubmissionState::Failed, Some(failure)) = (self.form.state(), self.form.failure()) {
                        html! {
                            <div class="submit-failure" role="alert">
                                <p>{ failure.to_string() }</p>
                                <p>
                                    {"Please try again, or call us at "}
                                    <a href={config::tel_href()} onclick={ctx.props().analytics.on_click(AnalyticsEvent::phone_call(&config::tel_href()))}>
                                        { config::BUSINESS_PHONE }
                                    </a>
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
                    <div class="form-row">
                        { self.view_input(ctx, NAME, "Full Name *", "text", "name") }
                        { self.view_input(ctx, EMAIL, "Email Address *", "email", "email") }
                    </div>
                    <div class="form-row">
                        { self.view_input(ctx, PHONE, "Phone Number *", "tel", "tel") }
                        { self.view_select(ctx, SERVICE_TYPE, "serviceType", "Service Needed *", "Select a service", &config::SERVICES) }
                    </div>
                    <div class="form-row">
                        { self.view_select(ctx, BOROUGH, "borough", "Borough", "Select your borough", &config::BOROUGHS) }
                        { self.view_call_times(ctx) }
                    </div>
                    { self.view_message(ctx) }
                    <button type="submit" class="submit-button" disabled={!control.enabled}>
                        if control.busy {
                            <span class="button-loading">{ control.label() }</span>
                        } else {
                            <span class="button-text">{ control.label() }</span>
                        }
                    </button>
                </form>
            </div>
        }
    }
}

impl ContactForm {
    fn view_notice(&self, ctx: &Context<Self>) -> Html {
        if self.form.notice().is_none() {
            return html! {};
        }
        let analytics = &ctx.props().analytics;
        let dismiss = ctx.link().callback(|_: MouseEvent| ContactFormMsg::DismissNotice);

        html! {
            <div class="success-message" ref={self.notice_ref.clone()} role="status">
                <div class="success-content">
                    <button class="success-dismiss" aria-label="Dismiss" onclick={dismiss}>{"×"}</button>
                    <h3>{"Thank You!"}</h3>
                    <p>{"Your request has been submitted successfully. We'll contact you within 24 hours with your free estimate."}</p>
                    <p>
                        {"For immediate assistance, call us at "}
                        <a href={config::tel_href()} onclick={analytics.on_click(AnalyticsEvent::phone_call(&config::tel_href()))}>
                            { config::BUSINESS_PHONE }
                        </a>
                    </p>
                </div>
            </div>
        }
    }

    fn field_error(&self, name: &'static str) -> Html {
        match self.form.error(name) {
            Some(error) => html! { <div class="field-error">{ error.to_string() }</div> },
            None => html! {},
        }
    }

    fn field_class(&self, name: &'static str) -> Classes {
        classes!((self.form.error(name).is_some()).then(|| "error"))
    }

    fn view_input(&self, ctx: &Context<Self>, name: &'static str, label: &'static str, input_type: &'static str, autocomplete: &'static str) -> Html {
        let link = ctx.link();
        let oninput = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Edit(name, input.value())
        });
        let onblur = link.callback(move |_: FocusEvent| ContactFormMsg::Blur(name));
        let required = self.form.field(name).map(|f| f.required).unwrap_or(false);
        let invalid = self.form.field(name).map(|f| f.validity() != Validity::Valid).unwrap_or(false);

        html! {
            <div class="form-group">
                <label for={name}>{ label }</label>
                <input
                    id={name}
                    name={name}
                    type={input_type}
                    autocomplete={autocomplete}
                    class={self.field_class(name)}
                    aria-invalid={invalid.to_string()}
                    value={self.form.value(name).to_string()}
                    {required}
                    {oninput}
                    {onblur}
                />
                { self.field_error(name) }
            </div>
        }
    }

    fn view_select(&self, ctx: &Context<Self>, name: &'static str, id: &'static str, label: &'static str, placeholder: &'static str, options: &[(&'static str, &'static str)]) -> Html {
        let link = ctx.link();
        let onchange = link.callback(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            ContactFormMsg::Edit(name, select.value())
        });
        let onblur = link.callback(move |_: FocusEvent| ContactFormMsg::Blur(name));
        let current = self.form.value(name);
        let required = self.form.field(name).map(|f| f.required).unwrap_or(false);

        html! {
            <div class="form-group">
                <label for={id}>{ label }</label>
                <select {id} name={name} class={self.field_class(name)} {required} {onchange} {onblur}>
                    <option value="" selected={current.is_empty()}>{ placeholder }</option>
                    { for options.iter().map(|(value, text)| html! {
                        <option value={*value} selected={current == *value}>{ *text }</option>
                    }) }
                </select>
                { self.field_error(name) }
            </div>
        }
    }

    fn view_call_times(&self, ctx: &Context<Self>) -> Html {
        html! {
            <fieldset class="form-group call-times">
                <legend>{"Best time to call"}</legend>
                { for config::CALL_TIMES.iter().map(|(value, text)| {
                    let value = value.to_string();
                    let checked = self.form.call_times().contains(&value);
                    let onchange = {
                        let value = value.clone();
                        ctx.link().callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ContactFormMsg::ToggleCallTime(value.clone(), input.checked())
                        })
                    };
                    html! {
                        <label class="checkbox-label">
                            <input type="checkbox" name="call_time" value={value} {checked} {onchange} />
                            { *text }
                        </label>
                    }
                }) }
            </fieldset>
        }
    }

    fn view_message(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::Edit(MESSAGE, area.value())
        });

        html! {
            <div class="form-group">
                <label for={MESSAGE}>{"Project Details"}</label>
                <textarea
                    id={MESSAGE}
                    name={MESSAGE}
                    rows="5"
                    placeholder="Tell us about your project"
                    value={self.form.value(MESSAGE).to_string()}
                    {oninput}
                />
            </div>
        }
    }
}
