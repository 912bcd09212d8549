use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

pub fn toggle_indicator(is_open: bool) -> &'static str {
    if is_open { "−" } else { "+" }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "active"))}>
            <h3 class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{toggle_indicator(*is_open)}</span>
            </h3>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>

            <FaqItem question="Are your estimates really free?">
                <p>{"Yes. We visit, look at the job and give you a written quote at no cost and with no obligation."}</p>
            </FaqItem>
            <FaqItem question="Which areas do you serve?">
                <p>{"All five boroughs: Manhattan, Brooklyn, Queens, the Bronx and Staten Island."}</p>
            </FaqItem>
            <FaqItem question="Are you licensed and insured?">
                <p>{"Every technician is licensed for their trade and we carry full general liability and workers' compensation coverage."}</p>
            </FaqItem>
            <FaqItem question="How quickly can you come out?">
                <p>{"Most estimates are scheduled within two business days. For emergencies such as leaks or power loss, call us and we will send someone the same day."}</p>
            </FaqItem>
            <FaqItem question="Do you work with building management and co-op boards?">
                <p>{"We regularly file certificates of insurance and coordinate access with supers and managing agents."}</p>
            </FaqItem>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_tracks_open_state() {
        assert_eq!(toggle_indicator(false), "+");
        assert_eq!(toggle_indicator(true), "−");
    }
}
