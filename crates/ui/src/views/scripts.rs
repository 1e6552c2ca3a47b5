/// Installs the scroll listener in the webview and streams one frame per
/// scroll tick (plus one immediately) back through `dioxus.send`. The
/// listener removes itself once the dashboard root leaves the DOM, so a
/// remounted dashboard installs a fresh one.
pub(super) fn scroll_bridge_script() -> String {
    r##"(function() {
        const state = window.__sentiScrollBridge || (window.__sentiScrollBridge = {
            installed: false,
            onScroll: null,
        });
        const snapshot = () => {
            const root = document.getElementById("dashboard-root");
            if (!root) return null;
            const elements = [];
            document.querySelectorAll(".scroll-animate").forEach((el) => {
                if (!el.id) return;
                const rect = el.getBoundingClientRect();
                elements.push({ id: el.id, top: rect.top, bottom: rect.bottom });
            });
            return {
                offset: window.pageYOffset,
                viewport_height: window.innerHeight,
                content_height: document.documentElement.scrollHeight,
                elements: elements,
            };
        };
        const send = () => {
            const frame = snapshot();
            if (frame) dioxus.send(frame);
        };
        if (!state.installed) {
            state.installed = true;
            state.onScroll = () => {
                if (!document.getElementById("dashboard-root")) {
                    window.removeEventListener("scroll", state.onScroll);
                    state.installed = false;
                    return;
                }
                send();
            };
            window.addEventListener("scroll", state.onScroll);
        }
        send();
    })();"##
        .to_string()
}

/// Nudges the installed listener into sending a frame right away, e.g.
/// after new rows appeared without the user scrolling.
pub(super) fn request_scroll_frame_script() -> &'static str {
    "window.dispatchEvent(new Event('scroll'));"
}

pub(super) fn scroll_to_top_script() -> &'static str {
    "window.scrollTo({ top: 0, behavior: 'smooth' });"
}
