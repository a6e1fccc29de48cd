mod support;
mod report_api;
mod live_server;
