use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
}

/// The single error banner of a page.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div role="alert" class="alert alert-error mb-6">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying load error: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-6 gap-4">
            <div class="alert alert-warning">
                <i class="fas fa-exclamation-triangle"></i>
                <span class="text-sm">{&props.message}</span>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-ghost btn-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
